//! Display formatting helpers for monetary amounts and percentages.
//!
//! Pure functions, no failure modes. Risk-label mapping lives with the
//! model, in `models::risk::RiskCategory`.

/// Format an amount in the display currency.
///
/// Whole amounts render without decimals ("€18"), amounts with
/// fractional cents render with two ("€112.50"). The plan data mixes
/// both, matching the dashboard's card layout.
#[must_use]
pub fn currency(amount: f64) -> String {
    // Round to cents first so 112.499999 formats as €112.50, not €112.5
    let cents = (amount * 100.0).round();
    if (cents % 100.0).abs() < f64::EPSILON {
        format!("€{}", (cents / 100.0) as i64)
    } else {
        format!("€{:.2}", cents / 100.0)
    }
}

/// Format a percentage with one decimal place (e.g., "67.2%").
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}
