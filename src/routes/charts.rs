use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::pipeline::{calendar, normalize, rasterize, render, weekly};
use crate::source;
use crate::state::AppState;
use crate::store::weight::WeightLog;
use crate::types::chart::{ChartOptions, OutputConfig};
use crate::types::gradient::Gradient;

const CHART_BACKGROUND: (u8, u8, u8, u8) = (13, 17, 23, 255);

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/charts/weekly", get(weekly_chart))
        .route("/api/charts/calendar", get(calendar_chart))
        .route("/api/charts/weight", get(weight_chart))
}

#[derive(Debug, Deserialize)]
struct ChartQuery {
    width: Option<u32>,
    height: Option<u32>,
    gradient: Option<String>,
}

fn validate_dimensions(width: u32, height: u32) -> Result<(), AppError> {
    const MIN_DIM: u32 = 320;
    const MAX_DIM: u32 = 4096;
    const MAX_MEGAPIXELS: f64 = 10.0;

    if !(MIN_DIM..=MAX_DIM).contains(&width) || !(MIN_DIM..=MAX_DIM).contains(&height) {
        return Err(AppError::BadRequest(format!(
            "Invalid dimensions: {}x{}. Width/height must be between {} and {}",
            width, height, MIN_DIM, MAX_DIM
        )));
    }

    let megapixels = (width as f64 * height as f64) / 1_000_000.0;
    if megapixels > MAX_MEGAPIXELS {
        return Err(AppError::BadRequest(format!(
            "Image too large: {}x{} ({:.2} MP). Max allowed is {:.1} MP",
            width, height, megapixels, MAX_MEGAPIXELS
        )));
    }

    Ok(())
}

fn resolve_gradient(name: Option<&str>) -> Result<Gradient, AppError> {
    match name {
        None => Ok(Gradient::default()),
        Some(name) => Gradient::get(name).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid gradient: {}. Use 'heat', 'ember', 'ocean', or 'mono'",
                name
            ))
        }),
    }
}

fn line_chart_options(query: &ChartQuery) -> Result<ChartOptions, AppError> {
    let mut options = ChartOptions::line_defaults();
    match (query.width, query.height) {
        (Some(width), Some(height)) => {
            validate_dimensions(width, height)?;
            options.width = width;
            options.height = height;
        }
        (None, None) => {}
        _ => {
            return Err(AppError::BadRequest(
                "Both width and height must be provided together".to_string(),
            ))
        }
    }
    options.gradient = resolve_gradient(query.gradient.as_deref())?;
    Ok(options)
}

fn png_response(bytes: Vec<u8>) -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], bytes)
}

async fn weekly_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, AppError> {
    let options = line_chart_options(&query)?;
    let raw = source::recent_snapshot(&state).await?;
    let normalized = normalize::normalize(&raw);
    let weeks = weekly::aggregate_weeks(&normalized.records);

    let svg = render::render_weekly_chart(&weeks, &options)?;
    let png = rasterize::rasterize(
        &svg,
        &OutputConfig {
            width: options.width,
            height: options.height,
            background: Some(CHART_BACKGROUND),
        },
    )?;
    tracing::info!("Generated weekly chart: {} bytes", png.len());
    Ok(png_response(png))
}

async fn calendar_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, AppError> {
    let gradient = resolve_gradient(query.gradient.as_deref())?;
    let explicit = match (query.width, query.height) {
        (Some(width), Some(height)) => {
            validate_dimensions(width, height)?;
            Some((width, height))
        }
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "Both width and height must be provided together".to_string(),
            ))
        }
    };

    let raw = source::recent_snapshot(&state).await?;
    let normalized = normalize::normalize(&raw);
    let grid = calendar::build_calendar(&normalized.records, None);

    let (width, height) = explicit.unwrap_or_else(|| render::heatmap_dimensions(grid.len()));

    let svg = render::render_calendar_heatmap(&grid, &gradient)?;
    let png = rasterize::rasterize(
        &svg,
        &OutputConfig {
            width,
            height,
            background: Some(CHART_BACKGROUND),
        },
    )?;
    tracing::info!("Generated calendar heatmap: {} bytes", png.len());
    Ok(png_response(png))
}

async fn weight_chart(
    State(state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, AppError> {
    let options = line_chart_options(&query)?;
    let entries = WeightLog::new(&state.config().data_dir).read_all()?;

    let svg = render::render_weight_chart(&entries, &options)?;
    let png = rasterize::rasterize(
        &svg,
        &OutputConfig {
            width: options.width,
            height: options.height,
            background: Some(CHART_BACKGROUND),
        },
    )?;
    tracing::info!("Generated weight chart: {} bytes", png.len());
    Ok(png_response(png))
}
