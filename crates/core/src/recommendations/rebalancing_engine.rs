//! Rebalancing recommendations derived from a forecast.
//!
//! Rules are evaluated independently and every rule that matches contributes
//! one item:
//!
//! - **Imminent shortfall** (high): a balance below the threshold within the
//!   lookahead window triggers a transfer into the operating account sized to
//!   the deepest deficit in that window.
//! - **Excess liquidity** (medium): a balance above the excess limit triggers a
//!   transfer out, sized to bring the peak back to the excess target.
//! - **Seasonal gap** (low): a month with negative net flow, in a forecast
//!   where some month ends below the threshold, suggests a short-term credit
//!   line covering that month's net outflow.
//! - **Scheduled obligations**: caller-supplied payments, passed through.
//!
//! Items are deduplicated on `(action, date)`, numbered in generation order,
//! then stably sorted by priority.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashSet;

use super::recommendations_model::{Priority, RebalancingRecommendation, ScheduledObligation};
use crate::config::LiquidityPolicy;
use crate::errors::Result;
use crate::liquidity::{find_breach, MonthlyRecord};
use crate::simulation::DailyRecord;
use crate::utils::decimal_utils::round_currency;

pub const ACTION_SHORTFALL_TRANSFER: &str = "Transfer from Long-term to Operating";
pub const ACTION_EXCESS_TRANSFER: &str = "Transfer from Operating to Investment";
pub const ACTION_CREDIT_BRIDGE: &str = "Consider short-term credit line";

const REASON_EXCESS: &str = "Excess liquidity detected";
const REASON_CREDIT_BRIDGE: &str = "Bridge seasonal cash flow gap";
const REASON_SCHEDULED: &str = "Scheduled obligation";

/// A recommendation before ids are assigned.
struct Draft {
    date: NaiveDate,
    action: String,
    amount: Decimal,
    reason: String,
    priority: Priority,
}

/// Builds prioritized recommendation lists under a [`LiquidityPolicy`].
#[derive(Debug, Clone)]
pub struct RebalancingEngine {
    policy: LiquidityPolicy,
}

impl RebalancingEngine {
    pub fn new(policy: LiquidityPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Recommendations derived from the forecast alone.
    pub fn recommend(
        &self,
        monthly_records: &[MonthlyRecord],
        daily_records: &[DailyRecord],
        threshold: Decimal,
    ) -> Vec<RebalancingRecommendation> {
        self.recommend_with_schedule(monthly_records, daily_records, threshold, &[])
    }

    /// Derived recommendations followed by the caller's scheduled obligations.
    pub fn recommend_with_schedule(
        &self,
        monthly_records: &[MonthlyRecord],
        daily_records: &[DailyRecord],
        threshold: Decimal,
        scheduled: &[ScheduledObligation],
    ) -> Vec<RebalancingRecommendation> {
        let drafts = self
            .shortfall_transfer(daily_records, threshold)
            .into_iter()
            .chain(self.excess_transfer(daily_records, threshold))
            .chain(credit_bridge(monthly_records, threshold))
            .chain(scheduled_items(scheduled));

        let mut seen: HashSet<(String, NaiveDate)> = HashSet::new();
        let mut recommendations: Vec<RebalancingRecommendation> = Vec::new();
        for draft in drafts {
            if !seen.insert((draft.action.clone(), draft.date)) {
                debug!(
                    "Dropping duplicate recommendation '{}' on {}",
                    draft.action, draft.date
                );
                continue;
            }
            let id = u32::try_from(recommendations.len() + 1).unwrap_or(u32::MAX);
            recommendations.push(RebalancingRecommendation {
                id,
                date: draft.date,
                action: draft.action,
                amount: draft.amount,
                reason: draft.reason,
                priority: draft.priority,
            });
        }

        // Stable: ties keep generation order.
        recommendations.sort_by_key(|r| r.priority);
        debug!("Generated {} rebalancing recommendations", recommendations.len());
        recommendations
    }

    fn shortfall_transfer(&self, daily_records: &[DailyRecord], threshold: Decimal) -> Option<Draft> {
        let window_len = self.policy.shortfall_lookahead_periods.min(daily_records.len());
        let breach = find_breach(&daily_records[..window_len], threshold)?;
        Some(Draft {
            date: breach.date,
            action: ACTION_SHORTFALL_TRANSFER.to_string(),
            // Round up so the transfer fully covers the deficit.
            amount: breach.worst_deficit.ceil(),
            reason: format!("Projected cash shortfall in {} days", breach.periods_until),
            priority: Priority::High,
        })
    }

    fn excess_transfer(&self, daily_records: &[DailyRecord], threshold: Decimal) -> Option<Draft> {
        let excess_limit = threshold.checked_mul(self.policy.excess_multiplier)?;
        let first_excess = daily_records
            .iter()
            .find(|r| r.projected_balance > excess_limit)?;
        let peak = daily_records
            .iter()
            .map(|r| r.projected_balance)
            .fold(first_excess.projected_balance, Decimal::max);

        let target = threshold.checked_mul(self.policy.excess_target_multiplier)?;
        let amount = round_currency(peak.checked_sub(target)?);
        if amount <= Decimal::ZERO {
            return None;
        }
        Some(Draft {
            date: first_excess.date,
            action: ACTION_EXCESS_TRANSFER.to_string(),
            amount,
            reason: REASON_EXCESS.to_string(),
            priority: Priority::Medium,
        })
    }
}

fn credit_bridge(monthly_records: &[MonthlyRecord], threshold: Decimal) -> Option<Draft> {
    if !monthly_records.iter().any(|m| m.ending_balance < threshold) {
        return None;
    }
    let worst = monthly_records.iter().min_by_key(|m| m.net_cash_flow)?;
    let amount = round_currency(-worst.net_cash_flow);
    if amount <= Decimal::ZERO {
        return None;
    }
    Some(Draft {
        date: worst.first_date,
        action: ACTION_CREDIT_BRIDGE.to_string(),
        amount,
        reason: REASON_CREDIT_BRIDGE.to_string(),
        priority: Priority::Low,
    })
}

fn scheduled_items(scheduled: &[ScheduledObligation]) -> impl Iterator<Item = Draft> + '_ {
    scheduled.iter().filter_map(|obligation| {
        let amount = round_currency(obligation.amount);
        if amount <= Decimal::ZERO {
            warn!(
                "Skipping scheduled obligation '{}' on {}: non-positive amount {}",
                obligation.description, obligation.date, obligation.amount
            );
            return None;
        }
        Some(Draft {
            date: obligation.date,
            action: format!("Prepare for {}", obligation.description),
            amount,
            reason: REASON_SCHEDULED.to_string(),
            priority: obligation.priority,
        })
    })
}
