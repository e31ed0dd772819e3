use serde::{Deserialize, Serialize};

use super::allocation::AllocationBucket;
use super::overview::PortfolioOverview;
use super::position::{CryptoPosition, FundPosition, StockPosition};
use super::projection::ProjectionPoint;
use super::timeline::TimelineMonth;

use crate::errors::DashboardError;

/// The main data container: everything the dashboard displays.
///
/// Loaded once at startup and never mutated afterwards. The allocation
/// buckets aggregate the position lists (stocks bucket ↔ stock
/// positions, and so on), but no referential integrity is enforced at
/// runtime; the plan is hand-authored, trusted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// High-level facts (total capital, strategy, horizon, risk)
    pub overview: PortfolioOverview,

    /// Top-level split across the three asset classes
    pub allocation: Vec<AllocationBucket>,

    /// Direct stock holdings, in display order
    pub stock_positions: Vec<StockPosition>,

    /// Mutual fund positions with monthly contributions
    pub mutual_funds: Vec<FundPosition>,

    /// Cryptocurrency positions with DCA strategies
    pub crypto_positions: Vec<CryptoPosition>,

    /// Month-by-month funding timeline
    pub timeline: Vec<TimelineMonth>,

    /// Year-by-year growth projections
    pub projections: Vec<ProjectionPoint>,
}

impl InvestmentPlan {
    /// Deserialize a plan from JSON. Lets a host ship the plan as data
    /// instead of compiling it in.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the plan as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DashboardError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Serialization(e.to_string()))
    }
}
