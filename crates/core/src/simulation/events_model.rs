//! Discrete probabilistic cash-flow events.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Direction of an event's cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Inflow,
    Outflow,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Inflow => "inflow",
            EventKind::Outflow => "outflow",
        }
    }
}

/// An event that may hit the account at most once per period.
///
/// `probability_per_horizon` is the chance of the event over the whole
/// forecast; each period draws with `probability_per_horizon / periods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomEventModel {
    pub kind: EventKind,
    pub probability_per_horizon: f64,
    /// Non-negative magnitude; the sign comes from `kind`
    pub amount: Decimal,
    pub description: String,
}

impl RandomEventModel {
    /// Creates a validated event.
    pub fn new(
        kind: EventKind,
        probability_per_horizon: f64,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self> {
        let event = Self {
            kind,
            probability_per_horizon,
            amount,
            description: description.into(),
        };
        event.validate()?;
        Ok(event)
    }

    pub fn inflow(probability: f64, amount: Decimal, description: impl Into<String>) -> Result<Self> {
        Self::new(EventKind::Inflow, probability, amount, description)
    }

    pub fn outflow(probability: f64, amount: Decimal, description: impl Into<String>) -> Result<Self> {
        Self::new(EventKind::Outflow, probability, amount, description)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.probability_per_horizon) {
            return Err(Error::invalid_parameter(format!(
                "event '{}' probability must lie in [0, 1], got {}",
                self.description, self.probability_per_horizon
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::invalid_parameter(format!(
                "event '{}' amount must be non-negative, got {}",
                self.description, self.amount
            )));
        }
        Ok(())
    }

    /// Probability of the event in any single period of a `periods`-long horizon.
    /// A non-finite horizon probability never fires.
    pub fn per_period_probability(&self, periods: u32) -> f64 {
        if periods == 0 || !self.probability_per_horizon.is_finite() {
            return 0.0;
        }
        self.probability_per_horizon / f64::from(periods)
    }

    /// `+amount` for inflows, `-amount` for outflows.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            EventKind::Inflow => self.amount,
            EventKind::Outflow => -self.amount,
        }
    }

    /// One Bernoulli trial for a single period. Returns the signed amount on
    /// success and zero otherwise.
    pub fn draw<R: Rng + ?Sized>(&self, periods: u32, rng: &mut R) -> Decimal {
        let p = self.per_period_probability(periods).clamp(0.0, 1.0);
        if rng.gen_bool(p) {
            self.signed_amount()
        } else {
            Decimal::ZERO
        }
    }

    /// The two events the modeling tool starts with.
    pub fn default_set() -> Vec<Self> {
        vec![
            Self {
                kind: EventKind::Inflow,
                probability_per_horizon: 0.2,
                amount: dec!(100000),
                description: "Additional Investment".to_string(),
            },
            Self {
                kind: EventKind::Outflow,
                probability_per_horizon: 0.3,
                amount: dec!(150000),
                description: "Unexpected Expense".to_string(),
            },
        ]
    }
}
