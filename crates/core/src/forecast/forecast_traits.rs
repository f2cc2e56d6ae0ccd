use rust_decimal::Decimal;

use super::forecast_model::{ForecastReport, ForecastRequest};
use crate::errors::Result;
use crate::liquidity::ShortfallAlert;
use crate::recommendations::CreditLineProposal;
use crate::simulation::DailyRecord;

/// Trait for forecasting service operations
pub trait ForecastServiceTrait: Send + Sync {
    /// Runs the full pipeline for one simulated path.
    fn run_forecast(&self, request: &ForecastRequest) -> Result<ForecastReport>;

    /// Estimates shortfall risk across many simulated paths. `None` when no
    /// path dips below the threshold.
    fn assess_shortfall(&self, request: &ForecastRequest) -> Result<Option<ShortfallAlert>>;

    /// Credit lines for a client from assets and an existing daily history.
    fn suggest_credit_lines(
        &self,
        assets: Decimal,
        history: &[DailyRecord],
    ) -> [CreditLineProposal; 3];
}
