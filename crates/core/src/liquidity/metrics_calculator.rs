use log::debug;
use rust_decimal::Decimal;

use super::metrics_model::LiquidityMetrics;
use super::period_model::MonthlyRecord;
use crate::constants::RATIO_DECIMAL_PRECISION;

/// Derives summary statistics from a monthly forecast.
///
/// Empty input yields [`LiquidityMetrics::empty`] so callers can render a
/// neutral "no data" state. When there are no outflows the liquidity ratio
/// divides by one instead of zero.
pub fn compute_metrics(monthly_records: &[MonthlyRecord], threshold: Decimal) -> LiquidityMetrics {
    let (first, rest) = match monthly_records.split_first() {
        Some(split) => split,
        None => {
            debug!("No monthly records, returning empty liquidity metrics");
            return LiquidityMetrics::empty();
        }
    };

    let total_inflows: Decimal = monthly_records.iter().map(|m| m.inflows).sum();
    let total_outflows: Decimal = monthly_records.iter().map(|m| m.outflows).sum();
    let total_net: Decimal = monthly_records.iter().map(|m| m.net_cash_flow).sum();

    let month_count = monthly_records.len();
    let avg_monthly_net =
        (total_net / Decimal::from(month_count)).round_dp(RATIO_DECIMAL_PRECISION);

    let denominator = if total_outflows.is_zero() {
        Decimal::ONE
    } else {
        total_outflows
    };
    let liquidity_ratio = (total_inflows / denominator).round_dp(RATIO_DECIMAL_PRECISION);

    let (min_balance, max_balance) = rest.iter().fold(
        (first.ending_balance, first.ending_balance),
        |(min, max), month| (min.min(month.ending_balance), max.max(month.ending_balance)),
    );

    let below_threshold_months: Vec<MonthlyRecord> = monthly_records
        .iter()
        .filter(|m| m.ending_balance < threshold)
        .cloned()
        .collect();

    LiquidityMetrics {
        month_count,
        total_inflows,
        total_outflows,
        avg_monthly_net,
        liquidity_ratio,
        min_balance,
        max_balance,
        below_threshold_months,
    }
}
