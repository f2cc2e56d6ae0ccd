use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three credit-line archetypes offered to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditLineType {
    /// Secured by the investment portfolio
    AssetBased,
    /// Unsecured, sized from operating cash flow
    CashFlowBased,
    /// Partial portfolio collateral plus cash flow
    Hybrid,
}

impl CreditLineType {
    pub fn label(&self) -> &'static str {
        match self {
            CreditLineType::AssetBased => "Asset-Based Credit Line",
            CreditLineType::CashFlowBased => "Cash Flow-Based Credit Line",
            CreditLineType::Hybrid => "Hybrid Credit Solution",
        }
    }
}

impl std::fmt::Display for CreditLineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A structured credit-line proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditLineProposal {
    pub id: u32,
    #[serde(rename = "type")]
    pub line_type: CreditLineType,
    /// Credit limit in whole currency units
    pub amount: Decimal,
    /// Annual rate as a fraction (0.0425 = 4.25%)
    pub rate: Decimal,
    pub term: String,
    pub collateral: String,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
}
