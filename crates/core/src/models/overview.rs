use serde::{Deserialize, Serialize};

/// High-level facts about the whole plan. Exactly one per plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// Total capital to be deployed, in the display currency
    pub total_capital: f64,

    /// Human-readable strategy name (e.g., "Aggressive Growth with Balanced Risk")
    pub strategy_name: String,

    /// Expected return range as display text (e.g., "16-22% CAGR")
    pub expected_return: String,

    /// Investment horizon as display text (e.g., "3-5 years")
    pub investment_horizon: String,

    /// Overall risk label (e.g., "Medium-High").
    /// Free text, mapped to a category via `RiskCategory::from_label`.
    pub risk_level: String,
}
