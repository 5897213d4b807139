use std::collections::BTreeSet;

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::pipeline::weekly::week_start_of;
use crate::types::activity::ActivityRecord;
use crate::types::summary::Consistency;

/// Week-on-week consistency as of `now` (naive local, same frame as the
/// records). This week runs [Monday 00:00:00, now]; last week ends one
/// second before this week starts so the boundary instant is never counted
/// twice.
pub fn measure(records: &[ActivityRecord], now: NaiveDateTime) -> Consistency {
    let today = now.date();
    let this_week_start = week_start_of(today).and_time(NaiveTime::MIN);
    let last_week_start = this_week_start - Duration::days(7);
    let last_week_end = this_week_start - Duration::seconds(1);

    let mut days_this_week = BTreeSet::new();
    let mut days_last_week = BTreeSet::new();
    let mut runs_this_week = 0u32;
    let mut runs_by_same_point_last_week = 0u32;
    let mut activity_dates = BTreeSet::new();

    // Progress through the week, measured from Monday midnight; used to cut
    // last week off at the equivalent point so the comparison has no
    // lookahead bias.
    let elapsed_this_week = now - this_week_start;

    for record in records {
        let start = record.start_local;
        if start >= this_week_start && start <= now {
            days_this_week.insert(start.date());
            runs_this_week += 1;
        } else if start >= last_week_start && start <= last_week_end {
            days_last_week.insert(start.date());
            if start - last_week_start <= elapsed_this_week {
                runs_by_same_point_last_week += 1;
            }
        }
        let date = start.date();
        if date <= today {
            activity_dates.insert(date);
        }
    }

    // A streak is alive only through today: walk back day by day and stop at
    // the first date without activity.
    let mut streak_days = 0u32;
    let mut cursor = today;
    while activity_dates.contains(&cursor) {
        streak_days += 1;
        cursor -= Duration::days(1);
    }

    Consistency {
        days_run_this_week: days_this_week.len() as u32,
        days_run_last_week: days_last_week.len() as u32,
        runs_this_week,
        runs_by_same_point_last_week,
        streak_days,
    }
}
