use axum::{extract::State, response::Json};
use forecast::ForecastResult;
use tracing::instrument;

use crate::errors::ApiError;
use crate::schemas::{ApiResponse, AppState, ForecastParams};

/// Compute a forecast for a store from a JSON payload
#[utoipa::path(
    post,
    path = "/forecast",
    tag = "forecast",
    request_body = ForecastParams,
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastResult>),
        (status = 400, description = "Missing or malformed input", body = crate::schemas::ErrorResponse),
        (status = 422, description = "Forecast capability rejected the request", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn create_forecast(
    State(state): State<AppState>,
    Json(params): Json<ForecastParams>,
) -> Result<Json<ApiResponse<ForecastResult>>, ApiError> {
    let request = params.normalize()?;

    // Check cache first
    let cache_key = format!(
        "forecast_{}_{}",
        request.store_number, request.forecast_start_date
    );
    if let Some(result) = state.cache.get(&cache_key).await {
        let response = ApiResponse {
            data: result,
            message: "Forecast retrieved from cache".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let result = state.forecaster.forecast(&request).await?;

    // Cache the result
    state.cache.insert(cache_key, result.clone()).await;

    let response = ApiResponse {
        data: result,
        message: "Forecast computed successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
