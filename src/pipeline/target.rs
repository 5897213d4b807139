use chrono::NaiveDate;

use crate::types::summary::{ProgressSignal, TargetProgress, TrainingTarget, WeekBucket};

const TRAILING_WEEKS: usize = 4;
const TARGET_UPLIFT: f64 = 1.15;
const SURGING_THRESHOLD_PCT: f64 = 30.0;
const AHEAD_THRESHOLD_PCT: f64 = 20.0;

/// Suggested mileage for the upcoming week: +15% over the trailing average
/// of the most recent completed weeks, rounded up. The in-flight week is
/// always excluded so a partial week cannot deflate the target. With no
/// completed weeks both values are zero; that is a valid state, not an
/// error.
pub fn recommend(weeks: &[WeekBucket], current_week_start: NaiveDate) -> TrainingTarget {
    let completed: Vec<&WeekBucket> = weeks
        .iter()
        .filter(|bucket| bucket.week_start < current_week_start)
        .collect();

    let recent = if completed.len() > TRAILING_WEEKS {
        &completed[completed.len() - TRAILING_WEEKS..]
    } else {
        &completed[..]
    };

    if recent.is_empty() {
        return TrainingTarget {
            four_week_average_miles: 0.0,
            suggested_next_week_miles: 0.0,
        };
    }

    let average = recent.iter().map(|bucket| bucket.total_miles).sum::<f64>() / recent.len() as f64;

    TrainingTarget {
        four_week_average_miles: average,
        suggested_next_week_miles: (average * TARGET_UPLIFT).ceil(),
    }
}

/// Progress of the in-flight week against the target. Percent complete is
/// capped at 100; both percentages fall back to zero when their denominator
/// is zero.
pub fn progress_toward(target: &TrainingTarget, this_week_miles: f64) -> TargetProgress {
    let suggested = target.suggested_next_week_miles;
    let average = target.four_week_average_miles;

    let remaining_miles = (suggested - this_week_miles).max(0.0);
    let percent_complete = if suggested > 0.0 {
        (this_week_miles / suggested * 100.0).min(100.0)
    } else {
        0.0
    };
    let percent_above_average = if average > 0.0 {
        (this_week_miles - average) / average * 100.0
    } else {
        0.0
    };

    TargetProgress {
        this_week_miles,
        remaining_miles,
        percent_complete,
        percent_above_average,
        signal: signal_for(percent_above_average),
    }
}

/// Tier breaks are strict, so an exact 30% or 20% lands on the lower tier.
fn signal_for(percent_above_average: f64) -> ProgressSignal {
    if percent_above_average > SURGING_THRESHOLD_PCT {
        ProgressSignal::Surging
    } else if percent_above_average > AHEAD_THRESHOLD_PCT {
        ProgressSignal::Ahead
    } else {
        ProgressSignal::OnTrack
    }
}
