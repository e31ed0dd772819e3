use serde::{Deserialize, Serialize};

/// The three top-level asset classes of the plan. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Stocks,
    MutualFunds,
    Cryptocurrency,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Stocks => write!(f, "Stocks"),
            AssetClass::MutualFunds => write!(f, "Mutual Funds"),
            AssetClass::Cryptocurrency => write!(f, "Cryptocurrency"),
        }
    }
}

/// One slice of the top-level asset allocation.
///
/// A plan has exactly three buckets (one per `AssetClass`); their
/// percentages sum to 100 and each `amount` equals
/// `percentage × total_capital / 100`. Neither is enforced at
/// runtime; display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationBucket {
    /// Which asset class this bucket covers
    pub asset_class: AssetClass,

    /// Share of total capital, 0–100
    pub percentage: f64,

    /// Capital assigned to this bucket, in the display currency
    pub amount: f64,

    /// Expected return range as display text (e.g., "15-20%")
    pub expected_return: String,

    /// Risk label (free text, see `RiskCategory`)
    pub risk: String,
}

impl AllocationBucket {
    pub fn new(
        asset_class: AssetClass,
        percentage: f64,
        amount: f64,
        expected_return: impl Into<String>,
        risk: impl Into<String>,
    ) -> Self {
        Self {
            asset_class,
            percentage,
            amount,
            expected_return: expected_return.into(),
            risk: risk.into(),
        }
    }
}
