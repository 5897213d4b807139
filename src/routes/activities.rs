use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppError;
use crate::pipeline::normalize;
use crate::source;
use crate::state::AppState;
use crate::types::activity::ActivityRecord;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/activities", get(recent_activities))
}

#[derive(Serialize)]
struct ActivitiesResponse {
    activities: Vec<ActivityRecord>,
    dropped_records: usize,
}

/// The recent-runs table: normalized records in source order, plus how many
/// raw entries were dropped for data-quality reasons.
async fn recent_activities(
    State(state): State<AppState>,
) -> Result<Json<ActivitiesResponse>, AppError> {
    let raw = source::recent_snapshot(&state).await?;
    let normalized = normalize::normalize(&raw);

    Ok(Json(ActivitiesResponse {
        activities: normalized.records,
        dropped_records: normalized.dropped,
    }))
}
