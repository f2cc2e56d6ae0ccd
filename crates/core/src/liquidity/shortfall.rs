//! Shortfall detection and alerting.
//!
//! A single forecast path is scanned for its first sub-threshold day with
//! [`find_breach`]. Across many simulated paths the breaches are summarized
//! into a [`ShortfallAlert`] carrying a probability, the typical lead time and
//! the typical size of the gap.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LiquidityPolicy;
use crate::simulation::DailyRecord;
use crate::utils::decimal_utils::round_currency;

/// A path's first crossing below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breach {
    /// 1-based period of the first sub-threshold balance
    pub periods_until: u32,
    pub date: NaiveDate,
    /// Largest `threshold - balance` over the scanned records
    pub worst_deficit: Decimal,
}

/// Returns the first record whose balance is below `threshold`, along with the
/// deepest deficit found anywhere in `records`.
pub fn find_breach(records: &[DailyRecord], threshold: Decimal) -> Option<Breach> {
    let (index, first) = records
        .iter()
        .enumerate()
        .find(|(_, r)| r.projected_balance < threshold)?;

    let worst_deficit = records[index..]
        .iter()
        .map(|r| threshold - r.projected_balance)
        .fold(threshold - first.projected_balance, Decimal::max);

    Some(Breach {
        periods_until: u32::try_from(index + 1).unwrap_or(u32::MAX),
        date: first.date,
        worst_deficit,
    })
}

/// Urgency of a projected shortfall, by lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub fn from_days(days_until_shortfall: u32, policy: &LiquidityPolicy) -> Self {
        if days_until_shortfall <= policy.alert_high_days {
            AlertSeverity::High
        } else if days_until_shortfall <= policy.alert_medium_days {
            AlertSeverity::Medium
        } else {
            AlertSeverity::Low
        }
    }

    /// Badge text for the alert card.
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::High => "Urgent",
            AlertSeverity::Medium => "Warning",
            AlertSeverity::Low => "Monitor",
        }
    }
}

/// Probabilistic summary of shortfalls across simulated paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortfallAlert {
    /// Median first-breach period among breaching paths
    pub days_until_shortfall: u32,
    /// Mean worst deficit among breaching paths, in whole currency units
    pub amount: Decimal,
    /// Share of paths that breach, 0-100
    pub probability: Decimal,
    pub severity: AlertSeverity,
    pub paths_simulated: usize,
}

impl ShortfallAlert {
    /// Summarizes per-path outcomes. Returns `None` when no path breaches.
    pub fn from_outcomes(outcomes: &[Option<Breach>], policy: &LiquidityPolicy) -> Option<Self> {
        let breaches: Vec<&Breach> = outcomes.iter().flatten().collect();
        if breaches.is_empty() {
            return None;
        }

        let mut days: Vec<u32> = breaches.iter().map(|b| b.periods_until).collect();
        days.sort_unstable();
        let days_until_shortfall = days[(days.len() - 1) / 2];

        let count = Decimal::from(breaches.len());
        let total_deficit: Decimal = breaches.iter().map(|b| b.worst_deficit).sum();
        let amount = round_currency(total_deficit / count);
        let probability =
            round_currency(count * Decimal::ONE_HUNDRED / Decimal::from(outcomes.len()));

        Some(Self {
            days_until_shortfall,
            amount,
            probability,
            severity: AlertSeverity::from_days(days_until_shortfall, policy),
            paths_simulated: outcomes.len(),
        })
    }
}
