use serde::{Deserialize, Serialize};

/// One month of the funding timeline.
///
/// Months are 1-based and sequential with no gaps; the sum of all
/// months' amounts adds up (approximately) to the plan's total capital.
/// Action items stay free text; they name positions and funds by label
/// only, with no referential link to the position entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMonth {
    /// Month index, starting at 1
    pub month: u32,

    /// Capital deployed during this month
    pub amount: f64,

    /// Ordered action items for the month (free text)
    pub actions: Vec<String>,
}

impl TimelineMonth {
    pub fn new(month: u32, amount: f64, actions: Vec<String>) -> Self {
        Self {
            month,
            amount,
            actions,
        }
    }
}
