//! Simulation inputs and per-period outputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FORECAST_PERIODS, DEFAULT_INITIAL_BALANCE, DEFAULT_THRESHOLD,
    INITIAL_BALANCE_ASSET_SHARE,
};
use crate::errors::{Error, Result};
use crate::liquidity::LiquidityStatus;
use crate::utils::decimal_utils::round_currency;
use crate::utils::time_utils::inclusive_day_count;

/// Parameters of a single forecasting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParameters {
    pub start_date: NaiveDate,
    /// Inclusive end of the horizon; ignored when `periods` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Number of daily periods to project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub periods: Option<u32>,
    /// Opening balance; may be negative for an overdrawn start
    pub initial_balance: Decimal,
    /// Minimum healthy balance
    pub threshold: Decimal,
}

impl SimulationParameters {
    pub fn new(
        start_date: NaiveDate,
        periods: u32,
        initial_balance: Decimal,
        threshold: Decimal,
    ) -> Self {
        Self {
            start_date,
            end_date: None,
            periods: Some(periods),
            initial_balance,
            threshold,
        }
    }

    /// Defaults for a client: opening cash at 5% of assets, the standard
    /// threshold and a 30-day horizon.
    pub fn for_client_assets(assets: Decimal, start_date: NaiveDate) -> Self {
        Self::new(
            start_date,
            DEFAULT_FORECAST_PERIODS,
            round_currency(assets * INITIAL_BALANCE_ASSET_SHARE),
            DEFAULT_THRESHOLD,
        )
    }

    /// Number of periods to simulate.
    ///
    /// An explicit `periods` wins. Otherwise the horizon is the inclusive day
    /// count from `start_date` to `end_date`, or the default of 30.
    pub fn resolve_periods(&self) -> Result<u32> {
        if let Some(periods) = self.periods {
            return Ok(periods);
        }
        match self.end_date {
            Some(end_date) => inclusive_day_count(self.start_date, end_date).ok_or_else(|| {
                Error::invalid_parameter(format!(
                    "end date {} is before start date {}",
                    end_date, self.start_date
                ))
            }),
            None => Ok(DEFAULT_FORECAST_PERIODS),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold < Decimal::ZERO {
            return Err(Error::invalid_parameter(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        self.resolve_periods().map(|_| ())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(
            crate::utils::time_utils::today(),
            DEFAULT_FORECAST_PERIODS,
            DEFAULT_INITIAL_BALANCE,
            DEFAULT_THRESHOLD,
        )
    }
}

/// One projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    /// Net flow for the day, in whole currency units
    pub predicted_cash_flow: Decimal,
    /// Running balance after applying the day's flow
    pub projected_balance: Decimal,
    pub status: LiquidityStatus,
    /// Action label derived from `status`
    pub recommendation: String,
}
