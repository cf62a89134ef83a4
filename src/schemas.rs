use std::sync::Arc;

use forecast::{ForecastPoint, ForecastRequest, ForecastResult, Forecaster};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::errors::ApiError;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shared forecasting capability, constructed once at startup
    pub forecaster: Arc<dyn Forecaster>,
    /// Cache for computed forecasts
    pub cache: Cache<String, ForecastResult>,
}

/// Raw forecast parameters as submitted by a client.
///
/// Both the HTML form path and the JSON API path deserialize into this
/// shape and run the same [`ForecastParams::normalize`], so malformed input
/// is handled identically regardless of entry path.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ForecastParams {
    /// Store number as submitted (numeric string)
    pub store_number: Option<String>,
    /// Forecast start date (YYYY-MM-DD)
    pub forecast_start_date: Option<String>,
}

impl ForecastParams {
    /// Normalizes raw parameters into the canonical request handed to the
    /// forecaster.
    ///
    /// `store_number` must be present and parse as an integer; otherwise
    /// this fails before the forecaster is ever invoked. A missing start
    /// date is passed downstream as the empty string, where the forecaster
    /// rejects it during date parsing.
    pub fn normalize(self) -> Result<ForecastRequest, ApiError> {
        let raw_store = self
            .store_number
            .ok_or_else(|| ApiError::Input("missing required field `store_number`".to_string()))?;

        let store_number = raw_store.trim().parse::<i64>().map_err(|_| {
            ApiError::Input(format!(
                "`store_number` must be an integer, got {raw_store:?}"
            ))
        })?;

        Ok(ForecastRequest {
            store_number,
            forecast_start_date: self.forecast_start_date.unwrap_or_default(),
        })
    }
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of forecasts currently cached
    pub forecasts_cached: u64,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::create_forecast,
    ),
    components(
        schemas(
            ApiResponse<ForecastResult>,
            ErrorResponse,
            HealthResponse,
            ForecastParams,
            ForecastRequest,
            ForecastResult,
            ForecastPoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Store sales forecast endpoints"),
    ),
    info(
        title = "Storecast API",
        description = "Store sales forecasting service",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
