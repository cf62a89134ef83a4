use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::{ForecastError, Result};
use crate::{ForecastPoint, ForecastRequest, ForecastResult, Forecaster};

/// Date format accepted by the forecaster.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Forecaster backed by a precomputed weekly sales profile.
///
/// The profile is built once at construction. Store-to-store variation is a
/// deterministic scale factor of the store number, so equal requests always
/// produce equal results.
#[derive(Debug, Clone)]
pub struct SeasonalProfileForecaster {
    horizon_days: u32,
    /// Baseline daily sales, Monday first.
    weekday_profile: [Decimal; 7],
}

impl SeasonalProfileForecaster {
    /// Creates a forecaster predicting `horizon_days` days per request.
    pub fn new(horizon_days: u32) -> Self {
        Self {
            horizon_days,
            weekday_profile: build_weekday_profile(),
        }
    }

    /// Spreads stores over roughly 0.50..=1.49 of the base profile.
    fn store_scale(&self, store_number: i64) -> Decimal {
        Decimal::new(50 + store_number % 100, 2)
    }
}

fn build_weekday_profile() -> [Decimal; 7] {
    // Friday and Saturday peak; stores are closed on Sunday.
    [
        Decimal::new(5_200, 0),
        Decimal::new(4_900, 0),
        Decimal::new(4_700, 0),
        Decimal::new(4_800, 0),
        Decimal::new(5_600, 0),
        Decimal::new(6_300, 0),
        Decimal::ZERO,
    ]
}

#[async_trait]
impl Forecaster for SeasonalProfileForecaster {
    #[instrument(skip(self))]
    async fn forecast(&self, request: &ForecastRequest) -> Result<ForecastResult> {
        if request.store_number <= 0 {
            return Err(ForecastError::UnknownStore(request.store_number));
        }

        let start_date = NaiveDate::parse_from_str(&request.forecast_start_date, DATE_FORMAT)
            .map_err(|_| ForecastError::InvalidStartDate(request.forecast_start_date.clone()))?;

        let scale = self.store_scale(request.store_number);
        let mut points = Vec::with_capacity(self.horizon_days as usize);
        for offset in 0..self.horizon_days {
            let date = start_date
                .checked_add_signed(Duration::days(i64::from(offset)))
                .ok_or(ForecastError::HorizonOverflow(start_date))?;
            let base = self.weekday_profile[date.weekday().num_days_from_monday() as usize];
            points.push(ForecastPoint {
                date,
                predicted_sales: base * scale,
            });
        }

        debug!(
            store_number = request.store_number,
            %start_date,
            horizon_days = self.horizon_days,
            "Computed seasonal forecast"
        );

        Ok(ForecastResult {
            store_number: request.store_number,
            start_date,
            horizon_days: self.horizon_days,
            points,
        })
    }
}
