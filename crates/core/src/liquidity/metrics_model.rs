use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period_model::MonthlyRecord;

/// Summary statistics over a monthly forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityMetrics {
    /// Number of months the metrics were computed from; zero means no data
    pub month_count: usize,
    pub total_inflows: Decimal,
    pub total_outflows: Decimal,
    /// Mean of the monthly net cash flows
    pub avg_monthly_net: Decimal,
    /// total_inflows / total_outflows, with zero outflows treated as one
    pub liquidity_ratio: Decimal,
    pub min_balance: Decimal,
    pub max_balance: Decimal,
    /// Months ending below the threshold, in chronological order
    pub below_threshold_months: Vec<MonthlyRecord>,
}

impl LiquidityMetrics {
    /// The "no data" result returned for an empty forecast.
    pub fn empty() -> Self {
        Self {
            month_count: 0,
            total_inflows: Decimal::ZERO,
            total_outflows: Decimal::ZERO,
            avg_monthly_net: Decimal::ZERO,
            liquidity_ratio: Decimal::ZERO,
            min_balance: Decimal::ZERO,
            max_balance: Decimal::ZERO,
            below_threshold_months: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.month_count == 0
    }
}
