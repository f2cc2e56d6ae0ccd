//! Recommendations: prioritized rebalancing actions and credit-line proposals.

mod credit_line_advisor;
mod credit_line_model;
mod rebalancing_engine;
mod recommendations_model;

pub use credit_line_advisor::propose_credit_lines;
pub use credit_line_model::{CreditLineProposal, CreditLineType};
pub use rebalancing_engine::{
    RebalancingEngine, ACTION_CREDIT_BRIDGE, ACTION_EXCESS_TRANSFER, ACTION_SHORTFALL_TRANSFER,
};
pub use recommendations_model::{Priority, RebalancingRecommendation, ScheduledObligation};

#[cfg(test)]
mod rebalancing_engine_tests;
