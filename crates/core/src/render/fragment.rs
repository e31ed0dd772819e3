use serde::{Deserialize, Serialize};

/// The fixed set of named mount points the dashboard renders into.
///
/// `Display` gives the element id the host markup uses for each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountId {
    /// Grid of stock position cards
    StocksGrid,
    /// Container for mutual fund cards
    MutualFundsContainer,
    /// Container for crypto strategy cards
    CryptoStrategy,
    /// Container for timeline cards
    ImplementationTimeline,
    /// Canvas for the allocation donut chart
    AllocationChart,
    /// Canvas for the growth projection line chart
    GrowthChart,
}

impl MountId {
    /// All mount points, in initialization order.
    pub const ALL: [MountId; 6] = [
        MountId::StocksGrid,
        MountId::MutualFundsContainer,
        MountId::CryptoStrategy,
        MountId::ImplementationTimeline,
        MountId::AllocationChart,
        MountId::GrowthChart,
    ];
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            MountId::StocksGrid => "stocks-grid",
            MountId::MutualFundsContainer => "mutual-funds-container",
            MountId::CryptoStrategy => "crypto-strategy",
            MountId::ImplementationTimeline => "implementation-timeline",
            MountId::AllocationChart => "allocation-chart",
            MountId::GrowthChart => "growth-chart",
        };
        write!(f, "{id}")
    }
}

/// A location in the host display surface where rendered fragments are
/// attached. The host owns the actual DOM/widget tree; the core only
/// clears and appends.
pub trait MountPoint {
    /// Remove any previously rendered content. Renderers always clear
    /// before appending, so re-rendering never duplicates fragments.
    fn clear(&mut self);

    /// Attach one HTML fragment after any existing content.
    fn append(&mut self, html: &str);
}

/// The host display surface: resolves `MountId`s to mount points.
///
/// Returning `None` for an id means that section cannot render; the
/// controller records it as `DashboardError::MissingMountPoint` and
/// carries on with the other sections.
pub trait Surface {
    fn mount_point(&mut self, id: MountId) -> Option<&mut dyn MountPoint>;
}

/// Escape text for interpolation into an HTML fragment.
///
/// All plan text is static and trusted, but free-text fields (names,
/// rationales, action items) are escaped anyway so a plan loaded from
/// JSON cannot inject markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
