//! Cash-flow simulation: random events, the daily simulator and balance
//! accumulation.

mod balance_accumulator;
mod cash_flow_simulator;
mod events_model;
mod simulation_model;

pub use balance_accumulator::accumulate;
pub use cash_flow_simulator::CashFlowSimulator;
pub use events_model::{EventKind, RandomEventModel};
pub use simulation_model::{DailyRecord, SimulationParameters};
