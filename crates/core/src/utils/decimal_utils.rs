use num_traits::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CURRENCY_DECIMAL_PRECISION;
use crate::errors::{Error, Result};

/// Rounds an amount to the smallest currency unit, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Converts a sampled `f64` into a `Decimal`, rejecting NaN and infinities.
pub fn decimal_from_f64(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| Error::Calculation(format!("sample {} is not representable", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_midpoint_away_from_zero() {
        assert_eq!(round_currency(dec!(10.5)), dec!(11));
        assert_eq!(round_currency(dec!(-10.5)), dec!(-11));
        assert_eq!(round_currency(dec!(10.49)), dec!(10));
    }

    #[test]
    fn test_decimal_from_f64_rejects_nan() {
        assert!(decimal_from_f64(f64::NAN).is_err());
        assert_eq!(decimal_from_f64(-20000.0).unwrap(), dec!(-20000));
    }
}
