use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places kept on currency amounts produced by the engine (whole units).
pub const CURRENCY_DECIMAL_PRECISION: u32 = 0;

/// Number of periods simulated when neither `periods` nor an end date is given.
pub const DEFAULT_FORECAST_PERIODS: u32 = 30;

/// Default starting cash balance for a modeling run.
pub const DEFAULT_INITIAL_BALANCE: Decimal = dec!(500000);

/// Default minimum healthy balance.
pub const DEFAULT_THRESHOLD: Decimal = dec!(200000);

/// Share of client assets held as the opening cash balance.
pub const INITIAL_BALANCE_ASSET_SHARE: Decimal = dec!(0.05);

/// Lower bound of the default uniform baseline flow.
pub const DEFAULT_BASELINE_LOW: f64 = -20_000.0;

/// Upper bound of the default uniform baseline flow.
pub const DEFAULT_BASELINE_HIGH: f64 = 40_000.0;

/// A balance above `threshold * EXCESS_MULTIPLIER` is excess liquidity.
pub const DEFAULT_EXCESS_MULTIPLIER: Decimal = dec!(3);

/// Excess transfers bring the balance back down to `threshold * this`.
pub const DEFAULT_EXCESS_TARGET_MULTIPLIER: Decimal = dec!(2);

/// Number of leading periods inspected for an imminent shortfall.
pub const DEFAULT_SHORTFALL_LOOKAHEAD_PERIODS: usize = 7;

/// Shortfalls at most this many periods out are high severity.
pub const DEFAULT_ALERT_HIGH_DAYS: u32 = 7;

/// Shortfalls at most this many periods out are medium severity.
pub const DEFAULT_ALERT_MEDIUM_DAYS: u32 = 14;

/// Number of simulated paths used for shortfall probability estimates.
pub const DEFAULT_MONTE_CARLO_PATHS: usize = 500;

/// Decimal places kept on derived ratios and averages.
pub const RATIO_DECIMAL_PRECISION: u32 = 6;
