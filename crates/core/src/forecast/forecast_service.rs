//! Forecasting service implementation.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::forecast_model::{ForecastReport, ForecastRequest};
use super::forecast_traits::ForecastServiceTrait;
use crate::config::ForecastConfig;
use crate::errors::Result;
use crate::liquidity::{aggregate_monthly, compute_metrics, find_breach, Breach, ShortfallAlert};
use crate::recommendations::{propose_credit_lines, CreditLineProposal, RebalancingEngine};
use crate::simulation::{CashFlowSimulator, DailyRecord};

/// Runs simulate → aggregate → metrics → recommend → credit lines.
pub struct ForecastService {
    config: ForecastConfig,
    simulator: CashFlowSimulator,
    engine: RebalancingEngine,
}

impl ForecastService {
    /// Creates a new ForecastService, validating the configuration.
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let simulator = CashFlowSimulator::from_config(&config)?;
        let engine = RebalancingEngine::new(config.policy.clone())?;
        Ok(Self {
            config,
            simulator,
            engine,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Same as [`ForecastServiceTrait::run_forecast`] but draws from `rng`;
    /// `request.seed` is ignored.
    pub fn run_forecast_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ForecastRequest,
        rng: &mut R,
    ) -> Result<ForecastReport> {
        let params = &request.params;
        let daily = self.simulator.simulate(params, &request.events, rng)?;
        let monthly = aggregate_monthly(&daily);
        let metrics = compute_metrics(&monthly, params.threshold);
        let recommendations = self.engine.recommend_with_schedule(
            &monthly,
            &daily,
            params.threshold,
            &request.scheduled,
        );
        let credit_lines = request
            .assets
            .map(|assets| propose_credit_lines(assets, metrics.avg_monthly_net));

        debug!(
            "Forecast complete: {} days, {} months, {} recommendations, {} months below threshold",
            daily.len(),
            monthly.len(),
            recommendations.len(),
            metrics.below_threshold_months.len()
        );

        Ok(ForecastReport {
            initial_balance: params.initial_balance,
            threshold: params.threshold,
            daily,
            monthly,
            metrics,
            recommendations,
            credit_lines,
        })
    }

    fn rng_for(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl ForecastServiceTrait for ForecastService {
    fn run_forecast(&self, request: &ForecastRequest) -> Result<ForecastReport> {
        let mut rng = Self::rng_for(request.seed);
        self.run_forecast_with_rng(request, &mut rng)
    }

    fn assess_shortfall(&self, request: &ForecastRequest) -> Result<Option<ShortfallAlert>> {
        let paths = self.config.monte_carlo_paths;
        let base_seed = request.seed.unwrap_or_else(rand::random);
        let threshold = request.params.threshold;

        // Path i always uses seed base + i, so results do not depend on
        // how rayon schedules the work.
        let outcomes: Vec<Option<Breach>> = (0..paths)
            .into_par_iter()
            .map(|path| -> Result<Option<Breach>> {
                let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(path as u64));
                let daily = self
                    .simulator
                    .simulate(&request.params, &request.events, &mut rng)?;
                Ok(find_breach(&daily, threshold))
            })
            .collect::<Result<Vec<_>>>()?;

        let alert = ShortfallAlert::from_outcomes(&outcomes, &self.config.policy);
        match &alert {
            Some(alert) => debug!(
                "Shortfall in {}/{} paths, median {} days out",
                outcomes.iter().filter(|o| o.is_some()).count(),
                paths,
                alert.days_until_shortfall
            ),
            None => debug!("No shortfall across {} paths", paths),
        }
        Ok(alert)
    }

    fn suggest_credit_lines(
        &self,
        assets: Decimal,
        history: &[DailyRecord],
    ) -> [CreditLineProposal; 3] {
        let monthly = aggregate_monthly(history);
        let metrics = compute_metrics(&monthly, Decimal::ZERO);
        propose_credit_lines(assets, metrics.avg_monthly_net)
    }
}
