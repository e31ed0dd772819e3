use serde::{Deserialize, Serialize};

/// Projected portfolio value at the end of a given year, under three
/// growth scenarios.
///
/// Years are 0-based and sequential. Year 0 equals the plan's total
/// capital in all three series, and each series is non-decreasing as
/// the year increases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Year index, starting at 0 (today)
    pub year: u32,

    /// Conservative scenario value
    pub conservative: f64,

    /// Base-case scenario value
    pub base_case: f64,

    /// Optimistic scenario value
    pub optimistic: f64,
}

impl ProjectionPoint {
    pub fn new(year: u32, conservative: f64, base_case: f64, optimistic: f64) -> Self {
        Self {
            year,
            conservative,
            base_case,
            optimistic,
        }
    }
}
