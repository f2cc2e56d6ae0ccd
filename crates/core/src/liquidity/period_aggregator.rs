//! Groups a daily forecast into calendar months.

use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::period_model::{MonthKey, MonthlyRecord};
use crate::simulation::DailyRecord;

/// Folds daily records into one [`MonthlyRecord`] per calendar month.
///
/// Records are sorted by date first, so months come out in ascending order
/// whatever the input order. Months without records are omitted rather than
/// zero-filled; callers that need a dense calendar must pre-fill it.
pub fn aggregate_monthly(daily_records: &[DailyRecord]) -> Vec<MonthlyRecord> {
    if daily_records.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&DailyRecord> = daily_records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let mut months: BTreeMap<MonthKey, MonthlyRecord> = BTreeMap::new();
    for record in sorted {
        let flow = record.predicted_cash_flow;
        let month = months
            .entry(MonthKey::from_date(record.date))
            .or_insert_with(|| MonthlyRecord {
                month_key: MonthKey::from_date(record.date),
                first_date: record.date,
                last_date: record.date,
                day_count: 0,
                inflows: Decimal::ZERO,
                outflows: Decimal::ZERO,
                net_cash_flow: Decimal::ZERO,
                ending_balance: record.projected_balance,
            });

        if flow > Decimal::ZERO {
            month.inflows += flow;
        } else {
            month.outflows += -flow;
        }
        month.net_cash_flow += flow;
        month.day_count += 1;
        // Sorted input: the latest record seen is the month's last day.
        month.last_date = record.date;
        month.ending_balance = record.projected_balance;
    }

    debug!(
        "Aggregated {} daily records into {} months",
        daily_records.len(),
        months.len()
    );
    months.into_values().collect()
}
