//! Daily cash-flow simulation.
//!
//! Each period combines a baseline draw with one Bernoulli trial per random
//! event, rounds the sum to whole currency units, then the flows are
//! accumulated into running balances and classified against the threshold.
//! The random source is always supplied by the caller, so a seeded generator
//! reproduces a run exactly.

use log::debug;
use rand::Rng;
use rust_decimal::Decimal;

use super::balance_accumulator::accumulate;
use super::events_model::RandomEventModel;
use super::simulation_model::{DailyRecord, SimulationParameters};
use crate::config::{BaselineFlow, BaselineSampler, ForecastConfig, LiquidityPolicy};
use crate::errors::Result;
use crate::liquidity::ThresholdClassifier;
use crate::utils::decimal_utils::{decimal_from_f64, round_currency};
use crate::utils::time_utils::forecast_dates;

/// Produces daily forecasts from a baseline distribution and a liquidity policy.
#[derive(Debug, Clone)]
pub struct CashFlowSimulator {
    sampler: BaselineSampler,
    policy: LiquidityPolicy,
}

impl CashFlowSimulator {
    pub fn new(baseline: &BaselineFlow, policy: &LiquidityPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self {
            sampler: baseline.sampler()?,
            policy: policy.clone(),
        })
    }

    pub fn from_config(config: &ForecastConfig) -> Result<Self> {
        Self::new(&config.baseline, &config.policy)
    }

    pub fn policy(&self) -> &LiquidityPolicy {
        &self.policy
    }

    /// Draws `periods` net flows. Draw order per period is the baseline first,
    /// then each event in slice order.
    pub fn draw_flows<R: Rng + ?Sized>(
        &self,
        periods: u32,
        events: &[RandomEventModel],
        rng: &mut R,
    ) -> Result<Vec<Decimal>> {
        (0..periods)
            .map(|_| -> Result<Decimal> {
                let baseline = decimal_from_f64(self.sampler.draw(rng))?;
                let flow = events
                    .iter()
                    .fold(baseline, |acc, event| acc + event.draw(periods, rng));
                Ok(round_currency(flow))
            })
            .collect()
    }

    /// Runs one forecast path.
    ///
    /// Rejects a negative threshold, an inverted date range and malformed
    /// events. Zero periods yield an empty forecast.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        params: &SimulationParameters,
        events: &[RandomEventModel],
        rng: &mut R,
    ) -> Result<Vec<DailyRecord>> {
        params.validate()?;
        for event in events {
            event.validate()?;
        }
        let classifier = ThresholdClassifier::with_policy(params.threshold, &self.policy)?;
        let periods = params.resolve_periods()?;

        if periods == 0 {
            debug!("Simulation requested with zero periods, returning empty forecast");
            return Ok(Vec::new());
        }

        debug!(
            "Simulating {} periods from {} with {} random events",
            periods,
            params.start_date,
            events.len()
        );

        let dates = forecast_dates(params.start_date, periods)?;
        let flows = self.draw_flows(periods, events, rng)?;
        let balances = accumulate(params.initial_balance, &flows);

        let records = dates
            .into_iter()
            .zip(flows)
            .zip(balances)
            .map(|((date, flow), balance)| {
                let status = classifier.classify(balance);
                DailyRecord {
                    date,
                    predicted_cash_flow: flow,
                    projected_balance: balance,
                    status,
                    recommendation: status.recommendation().to_string(),
                }
            })
            .collect();

        Ok(records)
    }
}
