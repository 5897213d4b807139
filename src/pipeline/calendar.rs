use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::pipeline::weekly::week_start_of;
use crate::types::activity::ActivityRecord;
use crate::types::summary::{CalendarWeek, DayCell};

const WINDOW_WEEKS: i64 = 5;

/// Dense day-by-week grid for the trailing window `[as_of - 5 weeks, as_of]`,
/// widened to its enclosing Monday-start weeks so every row carries exactly
/// seven cells. Days without activity hold 0.0. Rows are ordered most recent
/// week first; days within a row run Monday through Sunday.
///
/// `as_of` defaults to the latest activity date; with no records and no
/// explicit date there is no window and the grid is empty.
pub fn build_calendar(records: &[ActivityRecord], as_of: Option<NaiveDate>) -> Vec<CalendarWeek> {
    let Some(as_of) = as_of.or_else(|| records.iter().map(|r| r.start_local.date()).max()) else {
        return Vec::new();
    };

    let window_start = as_of - Duration::weeks(WINDOW_WEEKS);
    let grid_start = week_start_of(window_start);
    let grid_end = week_start_of(as_of) + Duration::days(6);

    let mut miles_by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut day = grid_start;
    while day <= grid_end {
        miles_by_day.insert(day, 0.0);
        day += Duration::days(1);
    }
    for record in records {
        let date = record.start_local.date();
        if let Some(total) = miles_by_day.get_mut(&date) {
            *total += record.distance_miles;
        }
    }

    let mut weeks = Vec::new();
    let mut week_start = grid_start;
    while week_start <= grid_end {
        let days: Vec<DayCell> = (0..7)
            .map(|offset| {
                let date = week_start + Duration::days(offset);
                DayCell {
                    date,
                    total_miles: miles_by_day.get(&date).copied().unwrap_or(0.0),
                }
            })
            .collect();
        let total_miles = days.iter().map(|cell| cell.total_miles).sum();
        let total_runs = days.iter().filter(|cell| cell.total_miles > 0.0).count() as u32;
        weeks.push(CalendarWeek {
            week_start,
            days,
            total_miles,
            total_runs,
        });
        week_start += Duration::days(7);
    }

    weeks.reverse();
    weeks
}
