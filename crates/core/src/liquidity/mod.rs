//! Liquidity health: threshold classification, monthly aggregation, summary
//! metrics and shortfall alerts.

mod classifier;
mod metrics_calculator;
mod metrics_model;
mod period_aggregator;
mod period_model;
mod shortfall;

pub use classifier::{classify, classify_with_multiplier, LiquidityStatus, ThresholdClassifier};
pub use metrics_calculator::compute_metrics;
pub use metrics_model::LiquidityMetrics;
pub use period_aggregator::aggregate_monthly;
pub use period_model::{MonthKey, MonthlyRecord};
pub use shortfall::{find_breach, AlertSeverity, Breach, ShortfallAlert};
