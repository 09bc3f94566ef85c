//! Fetches JMA forecasts and reconciles the provider's overlapping reports into one
//! ordered forecast entry per day.

pub mod config;
pub mod day_key;
pub mod errors;
pub mod logging;
pub mod manager_jma;
pub mod models;
pub mod reconciler;
pub mod series;
pub mod store;

pub use day_key::DayKey;
pub use models::forecast::ForecastEntry;
pub use reconciler::{reconcile, Reconciler};
