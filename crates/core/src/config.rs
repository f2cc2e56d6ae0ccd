//! Engine configuration.
//!
//! The engine holds no ambient state: every policy constant that shapes a
//! forecast travels in a [`ForecastConfig`] value handed to the service. The
//! defaults reproduce the dashboard's behavior and can be overridden from JSON.

use log::debug;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{
    DEFAULT_ALERT_HIGH_DAYS, DEFAULT_ALERT_MEDIUM_DAYS, DEFAULT_BASELINE_HIGH,
    DEFAULT_BASELINE_LOW, DEFAULT_EXCESS_MULTIPLIER, DEFAULT_EXCESS_TARGET_MULTIPLIER,
    DEFAULT_MONTE_CARLO_PATHS, DEFAULT_SHORTFALL_LOOKAHEAD_PERIODS,
};
use crate::errors::{Error, Result};

// =============================================================================
// Baseline flow distribution
// =============================================================================

/// Distribution of the smooth per-period baseline cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BaselineFlow {
    /// Uniform draw over `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Gaussian draw, unbounded.
    Normal { mean: f64, std_dev: f64 },
    /// Every period receives the same baseline flow.
    Constant { value: f64 },
}

impl Default for BaselineFlow {
    fn default() -> Self {
        BaselineFlow::Uniform {
            low: DEFAULT_BASELINE_LOW,
            high: DEFAULT_BASELINE_HIGH,
        }
    }
}

impl BaselineFlow {
    /// Builds a reusable sampler, validating the distribution parameters.
    pub fn sampler(&self) -> Result<BaselineSampler> {
        match *self {
            BaselineFlow::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() || low > high {
                    return Err(Error::invalid_config(format!(
                        "uniform baseline requires finite low <= high, got [{}, {}]",
                        low, high
                    )));
                }
                if !(high - low).is_finite() {
                    return Err(Error::invalid_config(format!(
                        "uniform baseline range [{}, {}] is too wide",
                        low, high
                    )));
                }
                Ok(BaselineSampler::Uniform(Uniform::new_inclusive(low, high)))
            }
            BaselineFlow::Normal { mean, std_dev } => {
                if !mean.is_finite() {
                    return Err(Error::invalid_config(format!(
                        "normal baseline mean must be finite, got {}",
                        mean
                    )));
                }
                Normal::new(mean, std_dev)
                    .map(BaselineSampler::Normal)
                    .map_err(|e| Error::invalid_config(format!("normal baseline: {}", e)))
            }
            BaselineFlow::Constant { value } => {
                if !value.is_finite() {
                    return Err(Error::invalid_config(format!(
                        "constant baseline must be finite, got {}",
                        value
                    )));
                }
                Ok(BaselineSampler::Constant(value))
            }
        }
    }
}

/// A validated baseline distribution ready to draw from.
#[derive(Debug, Clone)]
pub enum BaselineSampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
    Constant(f64),
}

impl BaselineSampler {
    /// Draws one baseline flow. The constant sampler does not consume randomness.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            BaselineSampler::Uniform(dist) => dist.sample(rng),
            BaselineSampler::Normal(dist) => dist.sample(rng),
            BaselineSampler::Constant(value) => *value,
        }
    }
}

// =============================================================================
// Liquidity policy
// =============================================================================

/// Threshold policy shared by the classifier, the rebalancing engine and
/// shortfall alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiquidityPolicy {
    /// Balances above `threshold * excess_multiplier` are excess (default: 3)
    pub excess_multiplier: Decimal,

    /// Excess transfers target `threshold * excess_target_multiplier` (default: 2)
    pub excess_target_multiplier: Decimal,

    /// Leading periods checked for an imminent shortfall (default: 7)
    pub shortfall_lookahead_periods: usize,

    /// Shortfalls within this many periods are high severity (default: 7)
    pub alert_high_days: u32,

    /// Shortfalls within this many periods are medium severity (default: 14)
    pub alert_medium_days: u32,
}

impl Default for LiquidityPolicy {
    fn default() -> Self {
        Self {
            excess_multiplier: DEFAULT_EXCESS_MULTIPLIER,
            excess_target_multiplier: DEFAULT_EXCESS_TARGET_MULTIPLIER,
            shortfall_lookahead_periods: DEFAULT_SHORTFALL_LOOKAHEAD_PERIODS,
            alert_high_days: DEFAULT_ALERT_HIGH_DAYS,
            alert_medium_days: DEFAULT_ALERT_MEDIUM_DAYS,
        }
    }
}

impl LiquidityPolicy {
    /// Checks the ordering constraints between the policy constants.
    pub fn validate(&self) -> Result<()> {
        if self.excess_multiplier < Decimal::ONE {
            return Err(Error::invalid_config(format!(
                "excessMultiplier must be at least 1, got {}",
                self.excess_multiplier
            )));
        }
        if self.excess_target_multiplier < Decimal::ZERO
            || self.excess_target_multiplier > self.excess_multiplier
        {
            return Err(Error::invalid_config(format!(
                "excessTargetMultiplier must lie in [0, {}], got {}",
                self.excess_multiplier, self.excess_target_multiplier
            )));
        }
        if self.alert_high_days > self.alert_medium_days {
            return Err(Error::invalid_config(format!(
                "alertHighDays ({}) cannot exceed alertMediumDays ({})",
                self.alert_high_days, self.alert_medium_days
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Forecast configuration
// =============================================================================

/// Complete configuration for a forecasting service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
    pub baseline: BaselineFlow,
    pub policy: LiquidityPolicy,
    /// Paths simulated when estimating shortfall probability (default: 500)
    pub monte_carlo_paths: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            baseline: BaselineFlow::default(),
            policy: LiquidityPolicy::default(),
            monte_carlo_paths: DEFAULT_MONTE_CARLO_PATHS,
        }
    }
}

impl ForecastConfig {
    /// Parses and validates a JSON configuration. Missing keys take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ForecastConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading forecast configuration from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigIO(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.baseline.sampler()?;
        self.policy.validate()?;
        if self.monte_carlo_paths == 0 {
            return Err(Error::invalid_config("monteCarloPaths must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ForecastConfig::default();
        assert_eq!(
            config.baseline,
            BaselineFlow::Uniform {
                low: -20_000.0,
                high: 40_000.0
            }
        );
        assert_eq!(config.policy.excess_multiplier, dec!(3));
        assert_eq!(config.policy.excess_target_multiplier, dec!(2));
        assert_eq!(config.policy.shortfall_lookahead_periods, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = ForecastConfig::from_json_str(
            r#"{ "policy": { "excessMultiplier": 4 }, "baseline": { "type": "constant", "value": 0 } }"#,
        )
        .unwrap();
        assert_eq!(config.policy.excess_multiplier, dec!(4));
        assert_eq!(config.policy.excess_target_multiplier, dec!(2));
        assert_eq!(config.baseline, BaselineFlow::Constant { value: 0.0 });
        assert_eq!(config.monte_carlo_paths, 500);
    }

    #[test]
    fn test_normal_baseline_json() {
        let config = ForecastConfig::from_json_str(
            r#"{ "baseline": { "type": "normal", "mean": 30000, "stdDev": 5000 } }"#,
        )
        .unwrap();
        assert_eq!(
            config.baseline,
            BaselineFlow::Normal {
                mean: 30_000.0,
                std_dev: 5_000.0
            }
        );
    }

    #[test]
    fn test_inverted_uniform_rejected() {
        let result = ForecastConfig::from_json_str(
            r#"{ "baseline": { "type": "uniform", "low": 10, "high": -10 } }"#,
        );
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_uniform_range_wider_than_f64_rejected() {
        let result = ForecastConfig::from_json_str(
            r#"{ "baseline": { "type": "uniform", "low": -1e308, "high": 1e308 } }"#,
        );
        assert!(matches!(result, Err(Error::InvalidConfigValue(_))));
    }

    #[test]
    fn test_policy_target_above_excess_rejected() {
        let policy = LiquidityPolicy {
            excess_target_multiplier: dec!(5),
            ..LiquidityPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_multiplier_below_one_rejected() {
        let policy = LiquidityPolicy {
            excess_multiplier: dec!(0.5),
            excess_target_multiplier: dec!(0.5),
            ..LiquidityPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = ForecastConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(Error::ConfigIO(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "monteCarloPaths": 32 }}"#).unwrap();
        let config = ForecastConfig::from_path(file.path()).unwrap();
        assert_eq!(config.monte_carlo_paths, 32);
    }

    #[test]
    fn test_from_missing_path() {
        let result = ForecastConfig::from_path("/nonexistent/forecast.json");
        assert!(matches!(result, Err(Error::ConfigIO(_))));
    }

    #[test]
    fn test_uniform_sampler_stays_in_bounds() {
        let sampler = BaselineFlow::default().sampler().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let draw = sampler.draw(&mut rng);
            assert!((-20_000.0..=40_000.0).contains(&draw));
        }
    }

    #[test]
    fn test_constant_sampler() {
        let sampler = BaselineFlow::Constant { value: -1_500.0 }.sampler().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sampler.draw(&mut rng), -1_500.0);
    }
}
