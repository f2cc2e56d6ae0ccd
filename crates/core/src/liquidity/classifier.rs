//! Threshold classification of projected balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LiquidityPolicy;
use crate::constants::DEFAULT_EXCESS_MULTIPLIER;
use crate::errors::{Error, Result};

/// Liquidity health of a single balance.
///
/// Ordered by health: Shortfall < Normal < Excess. For a fixed threshold the
/// status never decreases as the balance grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiquidityStatus {
    /// Balance is below the threshold
    Shortfall,
    Normal,
    /// Balance is above `threshold * excess_multiplier`
    Excess,
}

impl LiquidityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityStatus::Shortfall => "SHORTFALL",
            LiquidityStatus::Normal => "NORMAL",
            LiquidityStatus::Excess => "EXCESS",
        }
    }

    /// Action label shown next to each projected day.
    pub fn recommendation(&self) -> &'static str {
        match self {
            LiquidityStatus::Shortfall => "Rebalance funds: Low liquidity",
            LiquidityStatus::Normal => "OK",
            LiquidityStatus::Excess => "Consider investments: Excess liquidity",
        }
    }
}

impl std::fmt::Display for LiquidityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies a balance with the default excess multiplier.
///
/// Total over every input, including a zero or negative threshold.
pub fn classify(balance: Decimal, threshold: Decimal) -> LiquidityStatus {
    classify_with_multiplier(balance, threshold, DEFAULT_EXCESS_MULTIPLIER)
}

/// Classifies a balance against `threshold` and `threshold * excess_multiplier`.
///
/// An excess limit beyond the `Decimal` range cannot be exceeded.
pub fn classify_with_multiplier(
    balance: Decimal,
    threshold: Decimal,
    excess_multiplier: Decimal,
) -> LiquidityStatus {
    if balance < threshold {
        return LiquidityStatus::Shortfall;
    }
    match threshold.checked_mul(excess_multiplier) {
        Some(limit) if balance > limit => LiquidityStatus::Excess,
        _ => LiquidityStatus::Normal,
    }
}

/// A threshold and excess multiplier validated once, then applied to many
/// balances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdClassifier {
    threshold: Decimal,
    excess_multiplier: Decimal,
}

impl ThresholdClassifier {
    /// Rejects a negative threshold or a multiplier below one.
    pub fn new(threshold: Decimal, excess_multiplier: Decimal) -> Result<Self> {
        if threshold < Decimal::ZERO {
            return Err(Error::invalid_parameter(format!(
                "threshold must be non-negative, got {}",
                threshold
            )));
        }
        if excess_multiplier < Decimal::ONE {
            return Err(Error::invalid_parameter(format!(
                "excess multiplier must be at least 1, got {}",
                excess_multiplier
            )));
        }
        Ok(Self {
            threshold,
            excess_multiplier,
        })
    }

    pub fn with_policy(threshold: Decimal, policy: &LiquidityPolicy) -> Result<Self> {
        Self::new(threshold, policy.excess_multiplier)
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Balance above which liquidity counts as excess, or `None` when the
    /// limit overflows `Decimal`.
    pub fn excess_limit(&self) -> Option<Decimal> {
        self.threshold.checked_mul(self.excess_multiplier)
    }

    pub fn classify(&self, balance: Decimal) -> LiquidityStatus {
        classify_with_multiplier(balance, self.threshold, self.excess_multiplier)
    }
}
