use axum::{extract::State, routing::get, Json, Router};
use chrono::Local;
use serde::Serialize;

use crate::error::AppError;
use crate::pipeline::{calendar, consistency, normalize, target, weekly};
use crate::source;
use crate::state::AppState;
use crate::types::activity::ActivityRecord;
use crate::types::summary::{CalendarWeek, Consistency, TargetProgress, TrainingTarget, WeekBucket};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

#[derive(Serialize)]
struct DashboardResponse {
    activities: Vec<ActivityRecord>,
    weekly: Vec<WeekBucket>,
    calendar: Vec<CalendarWeek>,
    consistency: Consistency,
    target: TrainingTarget,
    progress: TargetProgress,
    dropped_records: usize,
}

/// One payload with every aggregate the dashboard shows. All of it is
/// recomputed from the activity snapshot on each call; a source failure
/// aborts the whole request rather than rendering a partial dashboard.
async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let raw = source::recent_snapshot(&state).await?;
    let normalize::Normalized { records, dropped } = normalize::normalize(&raw);

    let now = Local::now().naive_local();
    let current_week_start = weekly::week_start_of(now.date());

    let weekly_buckets = weekly::aggregate_weeks(&records);
    let calendar_weeks = calendar::build_calendar(&records, None);
    let consistency = consistency::measure(&records, now);

    let this_week_miles = weekly_buckets
        .iter()
        .find(|bucket| bucket.week_start == current_week_start)
        .map(|bucket| bucket.total_miles)
        .unwrap_or(0.0);
    let target = target::recommend(&weekly_buckets, current_week_start);
    let progress = target::progress_toward(&target, this_week_miles);

    tracing::info!(
        "Dashboard built: {} runs over {} weeks ({} dropped)",
        records.len(),
        weekly_buckets.len(),
        dropped
    );

    Ok(Json(DashboardResponse {
        activities: records,
        weekly: weekly_buckets,
        calendar: calendar_weeks,
        consistency,
        target,
        progress,
        dropped_records: dropped,
    }))
}
