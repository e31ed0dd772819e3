//! The built-in, hand-authored investment plan the dashboard ships with.
//!
//! All figures are static display data. Hosts that want a different
//! plan can build an `InvestmentPlan` themselves or load one via
//! `InvestmentPlan::from_json`.

use crate::models::allocation::{AllocationBucket, AssetClass};
use crate::models::overview::PortfolioOverview;
use crate::models::plan::InvestmentPlan;
use crate::models::position::{CryptoPosition, FundPosition, StockPosition};
use crate::models::projection::ProjectionPoint;
use crate::models::timeline::TimelineMonth;

fn stock(
    company: &str,
    sector: &str,
    amount: f64,
    expected_return: &str,
    risk: &str,
    rationale: &str,
) -> StockPosition {
    StockPosition {
        company: company.to_string(),
        sector: sector.to_string(),
        amount,
        expected_return: expected_return.to_string(),
        risk: risk.to_string(),
        rationale: rationale.to_string(),
    }
}

fn fund(name: &str, amount: f64, monthly: f64, expected_return: &str, risk: &str) -> FundPosition {
    FundPosition {
        name: name.to_string(),
        amount,
        monthly_contribution: monthly,
        expected_return: expected_return.to_string(),
        risk: risk.to_string(),
    }
}

fn crypto(
    symbol: &str,
    name: &str,
    amount: f64,
    percentage: f64,
    strategy: &str,
    expected_return: &str,
) -> CryptoPosition {
    CryptoPosition {
        symbol: symbol.to_string(),
        name: name.to_string(),
        amount,
        percentage,
        strategy: strategy.to_string(),
        expected_return: expected_return.to_string(),
    }
}

fn month(month: u32, amount: f64, actions: &[&str]) -> TimelineMonth {
    TimelineMonth::new(month, amount, actions.iter().map(|a| a.to_string()).collect())
}

/// The "Aggressive Growth with Balanced Risk" plan: €250 total capital
/// split 45/35/20 across stocks, mutual funds, and crypto, deployed
/// over three months.
#[must_use]
pub fn aggressive_growth_plan() -> InvestmentPlan {
    InvestmentPlan {
        overview: PortfolioOverview {
            total_capital: 250.0,
            strategy_name: "Aggressive Growth with Balanced Risk".to_string(),
            expected_return: "16-22% CAGR".to_string(),
            investment_horizon: "3-5 years".to_string(),
            risk_level: "Medium-High".to_string(),
        },
        allocation: vec![
            AllocationBucket::new(AssetClass::Stocks, 45.0, 112.50, "15-20%", "Medium-High"),
            AllocationBucket::new(AssetClass::MutualFunds, 35.0, 87.50, "12-15%", "Medium"),
            AllocationBucket::new(AssetClass::Cryptocurrency, 20.0, 50.00, "20-30%", "High"),
        ],
        stock_positions: vec![
            stock("TCS", "Technology", 18.0, "15-20%", "Medium", "AI leader, strong fundamentals"),
            stock("Apollo Hospitals", "Healthcare", 15.0, "18-22%", "Medium", "Healthcare expansion story"),
            stock("HDFC Bank", "Banking", 15.0, "12-15%", "Low-Medium", "Best-in-class private bank"),
            stock("Infosys", "Technology", 12.0, "12-18%", "Medium", "Digital transformation leader"),
            stock("Tata Power", "Energy", 12.0, "20-25%", "Medium-High", "Green energy transition"),
            stock("Sun Pharma", "Pharma", 10.0, "12-16%", "Medium", "Largest pharma company"),
            stock("Axis Bank", "Banking", 10.0, "18-22%", "Medium-High", "Turnaround story"),
            stock("HUL", "FMCG", 10.0, "10-12%", "Low", "Defensive dividend play"),
            stock("JSW Energy", "Energy", 10.5, "25-30%", "High", "54.96% 5yr CAGR leader"),
        ],
        mutual_funds: vec![
            fund("JioBlackRock Flexi Cap", 50.0, 25.0, "12-15%", "High"),
            fund("Axis Bluechip Fund", 25.0, 12.5, "10-14%", "Medium"),
            fund("Mirae Asset Emerging Bluechip", 12.5, 6.25, "15-18%", "High"),
        ],
        crypto_positions: vec![
            crypto("BTC", "Bitcoin", 25.0, 50.0, "Weekly DCA 6.25 EUR", "15-25%"),
            crypto("ETH", "Ethereum", 15.0, 30.0, "Bi-weekly DCA 7.50 EUR", "18-30%"),
            crypto("SOL", "Solana", 10.0, 20.0, "5 EUR initial + 2.50 monthly", "20-40%"),
        ],
        timeline: vec![
            month(1, 85.0, &[
                "TCS (18)",
                "Apollo (15)",
                "HDFC (15)",
                "Start JioBlackRock SIP (25)",
                "Start BTC DCA (6.25/week)",
                "SOL initial (5)",
            ]),
            month(2, 83.0, &[
                "Infosys (12)",
                "Tata Power (12)",
                "Start Axis SIP (12.5)",
                "Start ETH DCA (7.5 bi-weekly)",
                "Start Mirae SIP (6.25)",
            ]),
            month(3, 82.0, &[
                "Sun Pharma (10)",
                "Axis Bank (10)",
                "HUL (10)",
                "JSW Energy (10.5)",
                "Complete all allocations",
            ]),
        ],
        projections: vec![
            ProjectionPoint::new(0, 250.0, 250.0, 250.0),
            ProjectionPoint::new(1, 280.0, 295.0, 313.0),
            ProjectionPoint::new(2, 314.0, 348.0, 391.0),
            ProjectionPoint::new(3, 351.0, 414.0, 488.0),
            ProjectionPoint::new(4, 393.0, 488.0, 610.0),
            ProjectionPoint::new(5, 441.0, 572.0, 763.0),
        ],
    }
}
