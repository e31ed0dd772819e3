pub mod charts;
pub mod data;
pub mod errors;
pub mod format;
pub mod models;
pub mod render;

use charts::allocation::AllocationChartAdapter;
use charts::backend::ChartBackend;
use charts::growth::GrowthChartAdapter;
use errors::DashboardError;
use models::plan::InvestmentPlan;
use render::fragment::{MountId, Surface};

/// What happened during an activation pass.
///
/// A missing mount point never aborts the whole dashboard: the section
/// is skipped and recorded here, and every other section still renders.
#[derive(Debug, Default)]
pub struct ActivationReport {
    /// Sections whose fragments were rendered
    pub sections_rendered: Vec<MountId>,

    /// Chart mount points that received a live chart instance
    pub charts_created: Vec<MountId>,

    /// Sections skipped because their mount point was absent
    pub skipped: Vec<DashboardError>,
}

/// Main entry point for the strategy dashboard core.
///
/// Owns the immutable investment plan and the two chart instances, and
/// maps the host's lifecycle signals (ready, resize, visibility change,
/// unload) onto renderers and adapters. Constructed explicitly by the
/// host entry point; there is no process-wide singleton.
#[must_use]
pub struct Dashboard {
    plan: InvestmentPlan,
    allocation_chart: AllocationChartAdapter,
    growth_chart: GrowthChartAdapter,
    active: bool,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("strategy", &self.plan.overview.strategy_name)
            .field("active", &self.active)
            .field("allocation_chart_live", &self.allocation_chart.is_live())
            .field("growth_chart_live", &self.growth_chart.is_live())
            .finish()
    }
}

impl Dashboard {
    /// Create an inactive dashboard around a plan. Nothing renders
    /// until the host signals readiness via `activate`.
    pub fn new(plan: InvestmentPlan) -> Self {
        Self {
            plan,
            allocation_chart: AllocationChartAdapter::new(),
            growth_chart: GrowthChartAdapter::new(),
            active: false,
        }
    }

    /// Create a dashboard around the built-in plan.
    pub fn with_builtin_plan() -> Self {
        Self::new(data::aggressive_growth_plan())
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Transition Uninitialized → Active: render every section and
    /// create both charts against the plan.
    ///
    /// Sections whose mount point is absent are skipped (recorded in
    /// the report); the rest render regardless of order, since no
    /// section depends on another's output. Charting-backend failures
    /// propagate as `Err` untranslated.
    ///
    /// Calling `activate` on an already-active dashboard re-renders:
    /// mount points are cleared and old chart instances destroyed
    /// before their replacements are created, so no fragments
    /// duplicate and no instances leak.
    pub fn activate(
        &mut self,
        surface: &mut dyn Surface,
        backend: &mut dyn ChartBackend,
    ) -> Result<ActivationReport, DashboardError> {
        let mut report = ActivationReport::default();

        match surface.mount_point(MountId::StocksGrid) {
            Some(mount) => {
                render::stocks::render(&self.plan.stock_positions, mount);
                report.sections_rendered.push(MountId::StocksGrid);
            }
            None => report
                .skipped
                .push(DashboardError::MissingMountPoint(MountId::StocksGrid)),
        }

        match surface.mount_point(MountId::MutualFundsContainer) {
            Some(mount) => {
                render::funds::render(&self.plan.mutual_funds, mount);
                report
                    .sections_rendered
                    .push(MountId::MutualFundsContainer);
            }
            None => report.skipped.push(DashboardError::MissingMountPoint(
                MountId::MutualFundsContainer,
            )),
        }

        match surface.mount_point(MountId::CryptoStrategy) {
            Some(mount) => {
                render::crypto::render(&self.plan.crypto_positions, mount);
                report.sections_rendered.push(MountId::CryptoStrategy);
            }
            None => report
                .skipped
                .push(DashboardError::MissingMountPoint(MountId::CryptoStrategy)),
        }

        match surface.mount_point(MountId::ImplementationTimeline) {
            Some(mount) => {
                render::timeline::render(
                    &self.plan.timeline,
                    self.plan.overview.total_capital,
                    mount,
                );
                report
                    .sections_rendered
                    .push(MountId::ImplementationTimeline);
            }
            None => report.skipped.push(DashboardError::MissingMountPoint(
                MountId::ImplementationTimeline,
            )),
        }

        // Charts need their canvas mount to exist before the backend
        // is asked to draw. A missing canvas skips that chart only; a
        // backend failure aborts activation.
        if surface.mount_point(MountId::AllocationChart).is_some() {
            self.allocation_chart
                .create(backend, &self.plan.allocation)?;
            report.charts_created.push(MountId::AllocationChart);
        } else {
            report
                .skipped
                .push(DashboardError::MissingMountPoint(MountId::AllocationChart));
        }

        if surface.mount_point(MountId::GrowthChart).is_some() {
            self.growth_chart.create(backend, &self.plan.projections)?;
            report.charts_created.push(MountId::GrowthChart);
        } else {
            report
                .skipped
                .push(DashboardError::MissingMountPoint(MountId::GrowthChart));
        }

        self.active = true;
        Ok(report)
    }

    /// Host resize signal: re-measure both charts. No-op while
    /// inactive or for charts that never got an instance.
    pub fn resize(&mut self) {
        self.allocation_chart.resize();
        self.growth_chart.resize();
    }

    /// Host visibility signal. Both branches are intentionally empty:
    /// this is the extension point where a host would pause/resume
    /// chart animations, behavior the dashboard does not define yet.
    pub fn visibility_changed(&mut self, hidden: bool) {
        if hidden {
            // pause point (unused)
        } else {
            // resume point (unused)
        }
    }

    /// Release both chart instances and return to the uninitialized
    /// state. Idempotent. Never invoked automatically; hosts that
    /// care about resource hygiene wire this to their unload signal.
    pub fn teardown(&mut self) {
        self.allocation_chart.destroy();
        self.growth_chart.destroy();
        self.active = false;
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The plan this dashboard displays.
    #[must_use]
    pub fn plan(&self) -> &InvestmentPlan {
        &self.plan
    }

    /// Whether `activate` has run (and `teardown` has not).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
