//! Core error types for the liquidity engine.
//!
//! Every stage of the engine is a pure computation, so the taxonomy is small:
//! rejected parameters, malformed configuration, and numerical failures that
//! cannot be resolved by a documented guard.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the liquidity engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter is outside its valid domain
    /// (negative threshold, inverted date range, probability above one...).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Forecast calculation failed: {0}")]
    Calculation(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// Creates an InvalidParameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Creates an InvalidConfigValue error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfigValue(message.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
