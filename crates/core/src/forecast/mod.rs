//! Forecast orchestration.
//!
//! The service wires the simulator, aggregator, metrics calculator,
//! rebalancing engine and credit-line advisor into a single call that hosts
//! invoke with a [`ForecastRequest`].

mod forecast_model;
mod forecast_service;
mod forecast_traits;

pub use forecast_model::{ForecastReport, ForecastRequest};
pub use forecast_service::ForecastService;
pub use forecast_traits::ForecastServiceTrait;
