use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::goals::GoalLog;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/goals", get(read_goals).put(write_goals))
}

#[derive(Debug, Serialize, Deserialize)]
struct GoalsPayload {
    goals: Vec<String>,
}

async fn read_goals(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goals = GoalLog::new(&state.config().data_dir).read()?;
    Ok(Json(GoalsPayload { goals }))
}

async fn write_goals(
    State(state): State<AppState>,
    Json(payload): Json<GoalsPayload>,
) -> Result<impl IntoResponse, AppError> {
    let log = GoalLog::new(&state.config().data_dir);
    log.write(&payload.goals)?;
    tracing::info!("Stored {} goal lines", payload.goals.len());
    Ok(Json(GoalsPayload {
        goals: payload.goals,
    }))
}
