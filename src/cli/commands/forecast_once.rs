use anyhow::Result;
use forecast::{default_forecaster, ForecastRequest, Forecaster};
use tracing::info;

/// Runs one forecast outside the web server and prints the result as JSON.
///
/// Takes the same canonical request shape as the web entry paths.
pub async fn forecast_once(store_number: i64, forecast_start_date: String) -> Result<()> {
    info!(store_number, %forecast_start_date, "Running one-shot forecast");

    let forecaster = default_forecaster();
    let request = ForecastRequest {
        store_number,
        forecast_start_date,
    };
    let result = forecaster.forecast(&request).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
