//! Monthly reporting periods.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calendar month used to group daily records. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Aggregated cash flows for one calendar month of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month_key: MonthKey,
    /// Earliest day of the month present in the forecast
    pub first_date: NaiveDate,
    /// Latest day of the month present in the forecast
    pub last_date: NaiveDate,
    /// Number of daily records folded into this month
    pub day_count: usize,
    /// Sum of positive daily flows
    pub inflows: Decimal,
    /// Sum of negated negative daily flows (positive magnitude)
    pub outflows: Decimal,
    /// inflows - outflows
    pub net_cash_flow: Decimal,
    /// Projected balance on `last_date`
    pub ending_balance: Decimal,
}
