//! Forecast request and report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::liquidity::{LiquidityMetrics, MonthlyRecord};
use crate::recommendations::{CreditLineProposal, RebalancingRecommendation, ScheduledObligation};
use crate::simulation::{DailyRecord, RandomEventModel, SimulationParameters};

/// Everything a host supplies for one forecasting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub params: SimulationParameters,
    #[serde(default)]
    pub events: Vec<RandomEventModel>,
    /// Known payments surfaced as recommendations
    #[serde(default)]
    pub scheduled: Vec<ScheduledObligation>,
    /// Client assets; credit lines are proposed only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Decimal>,
    /// Seed for reproducible runs; entropy is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ForecastRequest {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            events: Vec::new(),
            scheduled: Vec::new(),
            assets: None,
            seed: None,
        }
    }

    pub fn with_events(mut self, events: Vec<RandomEventModel>) -> Self {
        self.events = events;
        self
    }

    pub fn with_scheduled(mut self, scheduled: Vec<ScheduledObligation>) -> Self {
        self.scheduled = scheduled;
        self
    }

    pub fn with_assets(mut self, assets: Decimal) -> Self {
        self.assets = Some(assets);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Output of a forecasting run, ready for charting and tabular display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub initial_balance: Decimal,
    pub threshold: Decimal,
    pub daily: Vec<DailyRecord>,
    pub monthly: Vec<MonthlyRecord>,
    pub metrics: LiquidityMetrics,
    pub recommendations: Vec<RebalancingRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_lines: Option<[CreditLineProposal; 3]>,
}
