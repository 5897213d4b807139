use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::activity::ActivityRecord;
use crate::types::summary::WeekBucket;

/// Monday of the ISO week containing `date`. The key is an absolute date,
/// so identically-numbered weeks of different years never collide.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Buckets records into Monday-start calendar weeks. Weeks without activity
/// are not materialized; output is sorted by week start, oldest first.
pub fn aggregate_weeks(records: &[ActivityRecord]) -> Vec<WeekBucket> {
    let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

    for record in records {
        let key = week_start_of(record.start_local.date());
        let entry = buckets.entry(key).or_insert((0.0, 0));
        entry.0 += record.distance_miles;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(week_start, (total_miles, number_of_runs))| WeekBucket {
            week_start,
            total_miles,
            number_of_runs,
        })
        .collect()
}
