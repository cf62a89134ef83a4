use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forecast::ForecastError;
use thiserror::Error;
use tracing::warn;

use crate::schemas::ErrorResponse;

/// Errors surfaced by the web layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed required request field, caught during
    /// normalization before the forecaster is invoked
    #[error("invalid input: {0}")]
    Input(String),

    /// Failure inside the forecast capability, cause opaque to this layer
    #[error("forecast failed: {0}")]
    Forecast(#[from] ForecastError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Input(_) => StatusCode::BAD_REQUEST,
            ApiError::Forecast(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Input(_) => "INPUT_ERROR",
            ApiError::Forecast(_) => "FORECAST_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Request failed");
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status_code(), Json(body)).into_response()
    }
}
