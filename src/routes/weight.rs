use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::weight::{WeightEntry, WeightLog};

const MIN_WEIGHT_KG: f64 = 30.0;
const MAX_WEIGHT_KG: f64 = 200.0;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/weight", get(weight_history).post(log_weight))
}

#[derive(Debug, Serialize)]
struct WeightHistoryResponse {
    entries: Vec<WeightEntry>,
}

#[derive(Debug, Deserialize)]
struct LogWeightRequest {
    date: Option<NaiveDate>,
    weight_kg: f64,
}

async fn weight_history(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = WeightLog::new(&state.config().data_dir).read_all()?;
    Ok(Json(WeightHistoryResponse { entries }))
}

async fn log_weight(
    State(state): State<AppState>,
    Json(request): Json<LogWeightRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !request.weight_kg.is_finite()
        || request.weight_kg < MIN_WEIGHT_KG
        || request.weight_kg > MAX_WEIGHT_KG
    {
        return Err(AppError::BadRequest(format!(
            "Invalid weight: {}. Expected a value between {} and {} kg",
            request.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG
        )));
    }

    let date = request.date.unwrap_or_else(|| Local::now().date_naive());
    let log = WeightLog::new(&state.config().data_dir);
    log.append(date, request.weight_kg)?;
    tracing::info!("Logged weight {} kg for {}", request.weight_kg, date);
    Ok(Json(WeightEntry {
        date,
        weight_kg: request.weight_kg,
    }))
}
