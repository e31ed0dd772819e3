use serde::{Deserialize, Serialize};

/// Display category for a risk label.
///
/// The plan data carries free-text risk labels ("Low-Medium",
/// "Medium-High", ...). Renderers reduce them to one of three badge
/// categories. The mapping is total: anything unrecognized falls back
/// to `Medium` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Map a free-text risk label to its display category.
    ///
    /// Case-insensitive. "low" and "low-medium" map to `Low`,
    /// "medium" and "medium-high" to `Medium`, "high" to `High`.
    /// Any other label defaults to `Medium`, an intentional leniency,
    /// not an error path.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" | "low-medium" => RiskCategory::Low,
            "high" => RiskCategory::High,
            // "medium", "medium-high", and everything unrecognized
            _ => RiskCategory::Medium,
        }
    }

    /// The badge CSS class the host stylesheet defines for this category.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskCategory::Low => "risk-badge--low",
            RiskCategory::Medium => "risk-badge--medium",
            RiskCategory::High => "risk-badge--high",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "Low"),
            RiskCategory::Medium => write!(f, "Medium"),
            RiskCategory::High => write!(f, "High"),
        }
    }
}
