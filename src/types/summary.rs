use chrono::NaiveDate;
use serde::Serialize;

/// Aggregate of all activities within one Monday-to-Sunday period. Weeks
/// without activity are never materialized here; the calendar grid fills its
/// own gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub total_miles: f64,
    pub number_of_runs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub total_miles: f64,
}

/// One row of the dense calendar grid: exactly seven day cells, Monday
/// through Sunday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarWeek {
    pub week_start: NaiveDate,
    pub days: Vec<DayCell>,
    pub total_miles: f64,
    pub total_runs: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consistency {
    pub days_run_this_week: u32,
    pub days_run_last_week: u32,
    pub runs_this_week: u32,
    pub runs_by_same_point_last_week: u32,
    pub streak_days: u32,
}

/// Trailing-average mileage target for the upcoming week, derived solely
/// from completed weeks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingTarget {
    pub four_week_average_miles: f64,
    pub suggested_next_week_miles: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSignal {
    Surging,
    Ahead,
    OnTrack,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetProgress {
    pub this_week_miles: f64,
    pub remaining_miles: f64,
    pub percent_complete: f64,
    pub percent_above_average: f64,
    pub signal: ProgressSignal,
}
