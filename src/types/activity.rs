use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One entry as returned by the activity API. Every field is defaulted so a
/// sparse or oddly-shaped entry still deserializes; validation happens in the
/// normalizer, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawActivity {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: i64,
    #[serde(default)]
    pub elapsed_time: i64,
    #[serde(default)]
    pub average_speed: f64,
    #[serde(default)]
    pub start_date_local: Option<String>,
    #[serde(default)]
    pub total_elevation_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Run,
    VirtualRun,
}

impl ActivityType {
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "Run" => Some(ActivityType::Run),
            "VirtualRun" => Some(ActivityType::VirtualRun),
            _ => None,
        }
    }
}

/// Canonical activity record. Built once by the normalizer; the derived
/// display fields are computed at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub start_local: NaiveDateTime,
    pub name: String,
    pub activity_type: ActivityType,
    pub distance_meters: f64,
    pub moving_time_seconds: u32,
    pub elapsed_time_seconds: u32,
    pub average_speed_mps: f64,
    pub total_elevation_gain_m: f64,
    pub distance_miles: f64,
    pub pace_per_mile: String,
    pub moving_time_formatted: String,
    pub elapsed_time_formatted: String,
}
