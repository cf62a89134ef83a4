pub mod forecast_once;
pub mod serve;

pub use forecast_once::forecast_once;
pub use serve::serve;
