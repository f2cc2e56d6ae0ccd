//! Liquidity Core - cash forecasting and recommendation engine.
//!
//! This crate projects future cash positions under uncertainty, rolls them up
//! into monthly reporting periods, classifies liquidity health against a
//! threshold and derives prioritized rebalancing and credit-line
//! recommendations. It performs no I/O beyond optional configuration loading;
//! hosts pass every parameter explicitly and render the returned values.

pub mod config;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod liquidity;
pub mod recommendations;
pub mod simulation;
pub mod utils;

pub use config::{BaselineFlow, ForecastConfig, LiquidityPolicy};
pub use forecast::{ForecastReport, ForecastRequest, ForecastService, ForecastServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
