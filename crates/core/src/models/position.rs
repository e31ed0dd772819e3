use serde::{Deserialize, Serialize};

/// A single direct stock holding.
///
/// Positions are kept in display order; the order carries no other
/// meaning. Their amounts add up (approximately) to the stocks bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    /// Company name (e.g., "HDFC Bank")
    pub company: String,

    /// Sector label (e.g., "Banking")
    pub sector: String,

    /// Capital assigned to this position
    pub amount: f64,

    /// Expected return range as display text
    pub expected_return: String,

    /// Risk label (free text, see `RiskCategory`)
    pub risk: String,

    /// Free-text rationale shown on the position card
    pub rationale: String,
}

/// A mutual fund position funded via a monthly contribution (SIP).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundPosition {
    /// Fund name
    pub name: String,

    /// Total capital assigned to this fund
    pub amount: f64,

    /// Monthly contribution amount
    pub monthly_contribution: f64,

    /// Expected return range as display text
    pub expected_return: String,

    /// Risk label (free text, see `RiskCategory`)
    pub risk: String,
}

/// A cryptocurrency position acquired via dollar-cost averaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoPosition {
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Capital assigned to this position
    pub amount: f64,

    /// Share of the crypto bucket, 0–100; shares sum to 100
    pub percentage: f64,

    /// DCA strategy as display text (e.g., "Weekly DCA 6.25 EUR")
    pub strategy: String,

    /// Expected return range as display text
    pub expected_return: String,
}
