// src/analytics/mod.rs
// Pure, synchronous analytics over the fixture data. No side effects.

pub mod classifier;
pub mod predictor;
pub mod report;

pub use classifier::{classify, Classification};
pub use predictor::{forecast, forecast_all, TrendAlert, TrendCategory, TrendForecast};
pub use report::compose_report;
