//! Recommendation domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Urgency of a recommendation.
///
/// Ordered by rank: High (0) < Medium (1) < Low (2). Recommendation lists are
/// sorted ascending on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggested fund movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingRecommendation {
    /// 1-based position in generation order
    pub id: u32,
    pub date: NaiveDate,
    pub action: String,
    /// Positive amount in whole currency units
    pub amount: Decimal,
    pub reason: String,
    pub priority: Priority,
}

/// A known future payment the host wants surfaced alongside derived
/// recommendations (quarterly tax, loan installment...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledObligation {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub priority: Priority,
}
