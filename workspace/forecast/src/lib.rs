//! Store sales forecasting capability.
//!
//! The web layer hands this crate a canonical [`ForecastRequest`] and gets
//! back a [`ForecastResult`]; everything about how the prediction is made
//! stays behind the [`Forecaster`] trait.

pub mod error;
pub mod seasonal;

pub use error::{ForecastError, Result};
pub use seasonal::SeasonalProfileForecaster;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical forecast request built by the web layer after normalization.
///
/// `store_number` is always an integer by the time it gets here; the start
/// date is carried as a raw string and parsed by the forecaster, which owns
/// date-format validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ForecastRequest {
    /// Store to forecast
    pub store_number: i64,
    /// Forecast start date (YYYY-MM-DD)
    pub forecast_start_date: String,
}

/// Predicted sales for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Date of the prediction
    pub date: NaiveDate,
    /// Predicted sales amount for that day
    pub predicted_sales: Decimal,
}

/// Forecast over a fixed horizon starting at `start_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResult {
    /// Store the forecast was computed for
    pub store_number: i64,
    /// Parsed forecast start date
    pub start_date: NaiveDate,
    /// Number of predicted days
    pub horizon_days: u32,
    /// One point per day in the horizon
    pub points: Vec<ForecastPoint>,
}

/// The forecasting capability shared across all handlers.
///
/// Implementations may hold expensive precomputed state, so a single
/// instance is constructed at startup and shared by reference.
#[async_trait]
pub trait Forecaster: std::fmt::Debug + Send + Sync {
    /// Computes a forecast for the given canonical request.
    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResult>;
}

/// Returns a default pre-configured forecaster that will be used most of
/// the time: a seasonal-profile model over a six-week horizon.
pub fn default_forecaster() -> SeasonalProfileForecaster {
    SeasonalProfileForecaster::new(42)
}
