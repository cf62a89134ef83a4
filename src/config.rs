use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::schemas::AppState;

/// Initialize application configuration and state.
///
/// The forecaster is constructed exactly once here and shared by reference
/// across all handlers for the lifetime of the process.
pub fn initialize_app_state() -> AppState {
    let forecaster = Arc::new(forecast::default_forecaster());

    // Forecasts are deterministic per (store, start date), so a small
    // short-lived cache covers repeated submissions.
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    AppState { forecaster, cache }
}
