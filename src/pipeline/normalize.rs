use chrono::{DateTime, NaiveDateTime};

use crate::types::activity::{ActivityRecord, ActivityType, RawActivity};

pub const METERS_PER_MILE: f64 = 1609.34;

/// Normalizer output: the canonical record sequence (input order preserved)
/// plus the number of records dropped for data-quality reasons. Entries of
/// non-running types are filtered out silently and are not counted as drops.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub records: Vec<ActivityRecord>,
    pub dropped: usize,
}

pub fn normalize(raw: &[RawActivity]) -> Normalized {
    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;

    for entry in raw {
        let Some(activity_type) = ActivityType::from_api_name(&entry.activity_type) else {
            continue;
        };

        let Some(start_local) = entry.start_date_local.as_deref().and_then(parse_start_local)
        else {
            tracing::warn!(
                "Dropping activity {:?}: missing or unparseable start_date_local {:?}",
                entry.name,
                entry.start_date_local
            );
            dropped += 1;
            continue;
        };

        if entry.moving_time < 0
            || entry.elapsed_time < 0
            || entry.distance < 0.0
            || entry.average_speed < 0.0
        {
            tracing::warn!("Dropping activity {:?}: negative distance or duration", entry.name);
            dropped += 1;
            continue;
        }

        let moving_time_seconds = entry.moving_time as u32;
        let elapsed_time_seconds = entry.elapsed_time as u32;

        records.push(ActivityRecord {
            start_local,
            name: entry.name.clone(),
            activity_type,
            distance_meters: entry.distance,
            moving_time_seconds,
            elapsed_time_seconds,
            average_speed_mps: entry.average_speed,
            total_elevation_gain_m: entry.total_elevation_gain,
            distance_miles: meters_to_miles(entry.distance),
            pace_per_mile: speed_to_pace_mile(entry.average_speed),
            moving_time_formatted: seconds_to_hhmmss(moving_time_seconds),
            elapsed_time_formatted: seconds_to_hhmmss(elapsed_time_seconds),
        });
    }

    Normalized { records, dropped }
}

/// Wall-clock fields are taken as written; a trailing offset designator
/// (the API appends "Z" to local times) is discarded, never applied.
fn parse_start_local(value: &str) -> Option<NaiveDateTime> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(value) {
        return Some(aware.naive_local());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Meters to miles, rounded to 2 decimals (half away from zero).
pub fn meters_to_miles(meters: f64) -> f64 {
    ((meters / METERS_PER_MILE) * 100.0).round() / 100.0
}

pub fn seconds_to_hhmmss(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Pace per mile as "MM:SS". A speed of zero means "no movement data" and
/// renders as the "00:00" sentinel, not as an infinite pace. The pace is
/// rounded to the nearest whole second before splitting into components.
pub fn speed_to_pace_mile(speed_mps: f64) -> String {
    if speed_mps <= 0.0 {
        return "00:00".to_string();
    }
    let pace_seconds = (METERS_PER_MILE / speed_mps).round() as u64;
    let minutes = pace_seconds / 60;
    let seconds = pace_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
