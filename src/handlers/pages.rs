use axum::{extract::State, http::StatusCode, response::Html, Form};
use tracing::instrument;

use crate::errors::ApiError;
use crate::schemas::{AppState, ForecastParams};
use crate::views;

/// Landing page with an empty forecast section
#[instrument]
pub async fn home() -> Html<String> {
    Html(views::render_index(None, None))
}

/// Form submission entry path.
///
/// Applies the same normalization as the JSON endpoint and re-renders the
/// landing page with either the forecast table or an error banner, so the
/// two entry paths never diverge on what reaches the forecaster.
#[instrument]
pub async fn forecast_web(
    State(state): State<AppState>,
    Form(params): Form<ForecastParams>,
) -> (StatusCode, Html<String>) {
    let request = match params.normalize() {
        Ok(request) => request,
        Err(err) => {
            return (
                err.status_code(),
                Html(views::render_index(None, Some(&err.to_string()))),
            );
        }
    };

    match state.forecaster.forecast(&request).await {
        Ok(result) => (StatusCode::OK, Html(views::render_index(Some(&result), None))),
        Err(err) => {
            let err = ApiError::from(err);
            (
                err.status_code(),
                Html(views::render_index(None, Some(&err.to_string()))),
            )
        }
    }
}
