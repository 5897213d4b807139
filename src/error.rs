use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{0} is not configured")]
    MissingConfig(&'static str),
    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),
    #[error("Activity fetch failed: {0}")]
    Fetch(String),
    #[error("Activity request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Activity service returned an unexpected payload: {0}")]
    UnexpectedPayload(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Log file error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("SVG generation failed: {0}")]
    SvgError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("PNG rendering failed: {0}")]
    RenderFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Source(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Log(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Render(_) | AppError::Raster(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
