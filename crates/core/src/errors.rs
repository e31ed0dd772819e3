use thiserror::Error;

use crate::render::fragment::MountId;

/// Unified error type for the entire strategy-dashboard-core library.
/// Every fallible public function returns `Result<T, DashboardError>`.
///
/// Note what is deliberately NOT here: an unrecognized risk label is
/// not an error: `RiskCategory::from_label` silently falls back to
/// `Medium`.
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Display surface ─────────────────────────────────────────────
    #[error("Missing mount point: {0}")]
    MissingMountPoint(MountId),

    // ── Charting backend ────────────────────────────────────────────
    /// A failure raised by the external charting backend during
    /// create/resize/destroy. Not translated: the message is passed
    /// through to the host's fault handling as-is.
    #[error("Chart backend error: {0}")]
    ChartBackend(String),

    // ── Plan import / export ────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Deserialization(e.to_string())
    }
}
