use thiserror::Error;

/// Error types for the forecast capability
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The forecast start date could not be parsed
    #[error("Invalid forecast start date: {0:?} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),

    /// The store number does not identify a known store
    #[error("Unknown store number: {0}")]
    UnknownStore(i64),

    /// The requested horizon runs past the supported date range
    #[error("Forecast horizon overflows the calendar starting at {0}")]
    HorizonOverflow(chrono::NaiveDate),
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
