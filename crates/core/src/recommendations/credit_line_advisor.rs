//! Credit-line proposals keyed off client assets and average monthly cash flow.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::credit_line_model::{CreditLineProposal, CreditLineType};
use crate::utils::decimal_utils::round_currency;

/// Share of assets offered as an asset-based line.
const ASSET_BASED_ASSET_SHARE: Decimal = dec!(0.25);
/// Months of average cash flow offered as a cash-flow-based line.
const CASH_FLOW_BASED_MONTHS: Decimal = dec!(12);
const HYBRID_ASSET_SHARE: Decimal = dec!(0.15);
const HYBRID_CASH_FLOW_MONTHS: Decimal = dec!(6);

const ASSET_BASED_RATE: Decimal = dec!(0.0425);
const CASH_FLOW_BASED_RATE: Decimal = dec!(0.0575);
const HYBRID_RATE: Decimal = dec!(0.049);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the asset-based, cash-flow-based and hybrid proposals, in that
/// order. Always produces all three; zero inputs give zero amounts.
///
/// The sign of `avg_monthly_cash_flow` is ignored: a net outflow is sized the
/// same as a net inflow of equal magnitude.
pub fn propose_credit_lines(
    assets: Decimal,
    avg_monthly_cash_flow: Decimal,
) -> [CreditLineProposal; 3] {
    let monthly_flow = avg_monthly_cash_flow.abs();

    let asset_based = CreditLineProposal {
        id: 1,
        line_type: CreditLineType::AssetBased,
        amount: round_currency(assets * ASSET_BASED_ASSET_SHARE),
        rate: ASSET_BASED_RATE,
        term: "Revolving".to_string(),
        collateral: "Investment Portfolio".to_string(),
        benefits: strings(&[
            "Lower interest rates than unsecured options",
            "Flexible draws and repayments",
            "No set maturity date",
        ]),
        considerations: strings(&[
            "Market volatility may affect available credit",
            "Risk of margin call if portfolio value declines",
        ]),
    };

    let cash_flow_based = CreditLineProposal {
        id: 2,
        line_type: CreditLineType::CashFlowBased,
        amount: round_currency(monthly_flow * CASH_FLOW_BASED_MONTHS),
        rate: CASH_FLOW_BASED_RATE,
        term: "24 months".to_string(),
        collateral: "None (cash flow secured)".to_string(),
        benefits: strings(&[
            "No portfolio collateral required",
            "Fixed terms for predictable budgeting",
            "No impact from market fluctuations",
        ]),
        considerations: strings(&[
            "Higher interest rate than asset-based options",
            "Fixed repayment schedule",
            "May require financial covenants",
        ]),
    };

    let hybrid = CreditLineProposal {
        id: 3,
        line_type: CreditLineType::Hybrid,
        amount: round_currency(
            assets * HYBRID_ASSET_SHARE + monthly_flow * HYBRID_CASH_FLOW_MONTHS,
        ),
        rate: HYBRID_RATE,
        term: "Revolving with 36-month term option".to_string(),
        collateral: "Partial portfolio collateral".to_string(),
        benefits: strings(&[
            "Balanced approach with lower collateral requirements",
            "Flexibility to convert between revolving and term",
            "Optimized for both short-term and long-term needs",
        ]),
        considerations: strings(&[
            "More complex structure",
            "Partial exposure to market volatility",
            "Requires periodic review and potential restructuring",
        ]),
    };

    [asset_based, cash_flow_based, hybrid]
}
