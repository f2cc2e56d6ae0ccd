//! Unit tests for the rebalancing engine.

use super::*;
use crate::config::LiquidityPolicy;
use crate::liquidity::{aggregate_monthly, classify, MonthlyRecord};
use crate::simulation::DailyRecord;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const THRESHOLD: Decimal = dec!(200000);

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// Builds a consecutive daily path from balances, deriving flows from the
/// differences so the path is internally consistent.
fn daily_path(initial: Decimal, balances: &[Decimal]) -> Vec<DailyRecord> {
    let mut previous = initial;
    balances
        .iter()
        .enumerate()
        .map(|(i, balance)| {
            let flow = *balance - previous;
            previous = *balance;
            let status = classify(*balance, THRESHOLD);
            DailyRecord {
                date: start() + Days::new(i as u64),
                predicted_cash_flow: flow,
                projected_balance: *balance,
                status,
                recommendation: status.recommendation().to_string(),
            }
        })
        .collect()
}

fn engine() -> RebalancingEngine {
    RebalancingEngine::new(LiquidityPolicy::default()).unwrap()
}

fn recommend(daily: &[DailyRecord]) -> Vec<RebalancingRecommendation> {
    let monthly: Vec<MonthlyRecord> = aggregate_monthly(daily);
    engine().recommend(&monthly, daily, THRESHOLD)
}

#[test]
fn test_healthy_path_has_no_recommendations() {
    let daily = daily_path(dec!(300000), &[dec!(310000), dec!(320000), dec!(305000)]);
    assert!(recommend(&daily).is_empty());
}

#[test]
fn test_shortfall_within_lookahead_is_high_priority() {
    let daily = daily_path(
        dec!(260000),
        &[
            dec!(250000),
            dec!(230000),
            dec!(190000),
            dec!(150000),
            dec!(210000),
        ],
    );
    let recommendations = recommend(&daily);

    assert_eq!(recommendations.len(), 1);
    let rec = &recommendations[0];
    assert_eq!(rec.priority, Priority::High);
    assert_eq!(rec.action, ACTION_SHORTFALL_TRANSFER);
    assert_eq!(rec.amount, dec!(50000));
    assert_eq!(rec.date, start() + Days::new(2));
    assert_eq!(rec.reason, "Projected cash shortfall in 3 days");
}

#[test]
fn test_shortfall_beyond_lookahead_is_not_high_priority() {
    let mut balances = vec![dec!(250000); 7];
    balances.push(dec!(100000));
    let daily = daily_path(dec!(250000), &balances);
    let recommendations = recommend(&daily);

    assert!(recommendations
        .iter()
        .all(|r| r.action != ACTION_SHORTFALL_TRANSFER));
}

#[test]
fn test_shortfall_deficit_rounds_up() {
    let daily = daily_path(dec!(250000), &[dec!(199999.40)]);
    let recommendations = recommend(&daily);
    let transfer = recommendations
        .iter()
        .find(|r| r.action == ACTION_SHORTFALL_TRANSFER)
        .unwrap();
    assert_eq!(transfer.amount, dec!(1));
}

#[test]
fn test_excess_transfer_sized_to_target() {
    let daily = daily_path(
        dec!(500000),
        &[dec!(550000), dec!(650000), dec!(720000), dec!(610000)],
    );
    let recommendations = recommend(&daily);

    assert_eq!(recommendations.len(), 1);
    let rec = &recommendations[0];
    assert_eq!(rec.priority, Priority::Medium);
    assert_eq!(rec.action, ACTION_EXCESS_TRANSFER);
    // Peak 720,000 brought back to 2 x 200,000.
    assert_eq!(rec.amount, dec!(320000));
    assert_eq!(rec.date, start() + Days::new(1));
    assert_eq!(rec.reason, "Excess liquidity detected");
}

#[test]
fn test_balance_at_excess_limit_is_not_excess() {
    let daily = daily_path(dec!(600000), &[dec!(600000)]);
    assert!(recommend(&daily).is_empty());
}

#[test]
fn test_all_matching_rules_emit_sorted_by_priority() {
    // Dips below threshold early, spikes above the excess limit later, and
    // ends the month below threshold with a net outflow.
    let daily = daily_path(
        dec!(210000),
        &[
            dec!(150000),
            dec!(700000),
            dec!(400000),
            dec!(120000),
        ],
    );
    let recommendations = recommend(&daily);

    let actions: Vec<&str> = recommendations.iter().map(|r| r.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            ACTION_SHORTFALL_TRANSFER,
            ACTION_EXCESS_TRANSFER,
            ACTION_CREDIT_BRIDGE
        ]
    );
    let ids: Vec<u32> = recommendations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let bridge = &recommendations[2];
    assert_eq!(bridge.priority, Priority::Low);
    assert_eq!(bridge.amount, dec!(90000));
    assert_eq!(bridge.date, start());
    assert_eq!(bridge.reason, "Bridge seasonal cash flow gap");
}

#[test]
fn test_credit_bridge_requires_sub_threshold_month() {
    let daily = daily_path(dec!(400000), &[dec!(350000), dec!(300000)]);
    assert!(recommend(&daily).is_empty());
}

#[test]
fn test_scheduled_obligations_are_merged_and_stably_sorted() {
    let daily = daily_path(dec!(500000), &[dec!(150000), dec!(160000)]);
    let monthly = aggregate_monthly(&daily);
    let scheduled = vec![
        ScheduledObligation {
            date: start() + Days::new(30),
            description: "quarterly tax payment".to_string(),
            amount: dec!(85000),
            priority: Priority::Medium,
        },
        ScheduledObligation {
            date: start() + Days::new(40),
            description: "insurance premium".to_string(),
            amount: dec!(12000),
            priority: Priority::High,
        },
    ];

    let recommendations =
        engine().recommend_with_schedule(&monthly, &daily, THRESHOLD, &scheduled);

    let summary: Vec<(u32, Priority)> = recommendations
        .iter()
        .map(|r| (r.id, r.priority))
        .collect();
    // Generation order: shortfall(1, high), bridge(2, low), tax(3, medium), insurance(4, high).
    assert_eq!(
        summary,
        vec![
            (1, Priority::High),
            (4, Priority::High),
            (3, Priority::Medium),
            (2, Priority::Low)
        ]
    );
    let tax = recommendations.iter().find(|r| r.id == 3).unwrap();
    assert_eq!(tax.action, "Prepare for quarterly tax payment");
    assert_eq!(tax.reason, "Scheduled obligation");
}

#[test]
fn test_duplicate_and_non_positive_obligations_are_dropped() {
    let date = start() + Days::new(10);
    let obligation = |amount: Decimal| ScheduledObligation {
        date,
        description: "loan installment".to_string(),
        amount,
        priority: Priority::Low,
    };
    let scheduled = vec![obligation(dec!(5000)), obligation(dec!(7000)), obligation(dec!(0))];

    let recommendations = engine().recommend_with_schedule(&[], &[], THRESHOLD, &scheduled);

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].amount, dec!(5000));
}

#[test]
fn test_empty_inputs_yield_empty_list() {
    assert!(engine().recommend(&[], &[], THRESHOLD).is_empty());
}

#[test]
fn test_custom_lookahead() {
    let policy = LiquidityPolicy {
        shortfall_lookahead_periods: 2,
        ..LiquidityPolicy::default()
    };
    let engine = RebalancingEngine::new(policy).unwrap();
    let daily = daily_path(dec!(300000), &[dec!(300000), dec!(300000), dec!(100000)]);
    let monthly = aggregate_monthly(&daily);

    let recommendations = engine.recommend(&monthly, &daily, THRESHOLD);

    assert!(recommendations
        .iter()
        .all(|r| r.action != ACTION_SHORTFALL_TRANSFER));
}

#[test]
fn test_excess_limit_beyond_decimal_range_is_never_reached() {
    let threshold = Decimal::MAX / dec!(2);
    let daily = daily_path(Decimal::MAX, &[Decimal::MAX, Decimal::MAX]);
    let monthly = aggregate_monthly(&daily);

    let recommendations = engine().recommend(&monthly, &daily, threshold);

    assert!(recommendations.is_empty());
}
