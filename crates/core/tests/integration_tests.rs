// ═══════════════════════════════════════════════════════════════════
// Dashboard facade tests: activation, host signals, teardown
// ═══════════════════════════════════════════════════════════════════

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use strategy_dashboard_core::charts::backend::{ChartBackend, ChartInstance, ChartSpec};
use strategy_dashboard_core::errors::DashboardError;
use strategy_dashboard_core::render::fragment::{MountId, MountPoint, Surface};
use strategy_dashboard_core::Dashboard;

// ═══════════════════════════════════════════════════════════════════
//  Fakes: in-memory surface + counting backend
// ═══════════════════════════════════════════════════════════════════

#[derive(Default)]
struct FakeMount {
    fragments: Vec<String>,
}

impl MountPoint for FakeMount {
    fn clear(&mut self) {
        self.fragments.clear();
    }

    fn append(&mut self, html: &str) {
        self.fragments.push(html.to_string());
    }
}

struct FakeSurface {
    mounts: HashMap<MountId, FakeMount>,
}

impl FakeSurface {
    /// A surface with every mount point present.
    fn full() -> Self {
        let mounts = MountId::ALL
            .into_iter()
            .map(|id| (id, FakeMount::default()))
            .collect();
        Self { mounts }
    }

    /// A surface missing the given mount points.
    fn without(missing: &[MountId]) -> Self {
        let mut surface = Self::full();
        for id in missing {
            surface.mounts.remove(id);
        }
        surface
    }

    fn fragments(&self, id: MountId) -> &[String] {
        &self.mounts[&id].fragments
    }
}

impl Surface for FakeSurface {
    fn mount_point(&mut self, id: MountId) -> Option<&mut dyn MountPoint> {
        self.mounts.get_mut(&id).map(|m| m as &mut dyn MountPoint)
    }
}

struct FakeInstance {
    live: Rc<Cell<usize>>,
    resizes: Rc<Cell<usize>>,
}

impl ChartInstance for FakeInstance {
    fn resize(&mut self) {
        self.resizes.set(self.resizes.get() + 1);
    }

    fn destroy(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[derive(Default)]
struct FakeBackend {
    live: Rc<Cell<usize>>,
    resizes: Rc<Cell<usize>>,
    created: Vec<MountId>,
    fail: bool,
}

impl ChartBackend for FakeBackend {
    fn create(
        &mut self,
        mount: MountId,
        _spec: &ChartSpec,
    ) -> Result<Box<dyn ChartInstance>, DashboardError> {
        if self.fail {
            return Err(DashboardError::ChartBackend("context lost".to_string()));
        }
        self.created.push(mount);
        self.live.set(self.live.get() + 1);
        Ok(Box::new(FakeInstance {
            live: Rc::clone(&self.live),
            resizes: Rc::clone(&self.resizes),
        }))
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Activation
// ═══════════════════════════════════════════════════════════════════

mod activation {
    use super::*;

    #[test]
    fn renders_every_section_and_both_charts() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        let report = dashboard.activate(&mut surface, &mut backend).unwrap();

        assert_eq!(report.sections_rendered.len(), 4);
        assert_eq!(
            report.charts_created,
            vec![MountId::AllocationChart, MountId::GrowthChart]
        );
        assert!(report.skipped.is_empty());
        assert!(dashboard.is_active());

        assert_eq!(surface.fragments(MountId::StocksGrid).len(), 9);
        assert_eq!(surface.fragments(MountId::MutualFundsContainer).len(), 3);
        assert_eq!(surface.fragments(MountId::CryptoStrategy).len(), 3);
        assert_eq!(surface.fragments(MountId::ImplementationTimeline).len(), 3);
        assert_eq!(backend.live.get(), 2);
    }

    #[test]
    fn missing_section_mount_skips_that_section_only() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::without(&[MountId::StocksGrid]);
        let mut backend = FakeBackend::default();

        let report = dashboard.activate(&mut surface, &mut backend).unwrap();

        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0],
            DashboardError::MissingMountPoint(MountId::StocksGrid)
        ));
        assert_eq!(report.sections_rendered.len(), 3);
        assert_eq!(backend.live.get(), 2);
        assert!(dashboard.is_active());
    }

    #[test]
    fn missing_chart_canvas_skips_that_chart_without_calling_the_backend() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::without(&[MountId::AllocationChart]);
        let mut backend = FakeBackend::default();

        let report = dashboard.activate(&mut surface, &mut backend).unwrap();

        assert!(matches!(
            report.skipped[0],
            DashboardError::MissingMountPoint(MountId::AllocationChart)
        ));
        assert_eq!(backend.created, vec![MountId::GrowthChart]);
        assert_eq!(backend.live.get(), 1);
    }

    #[test]
    fn chart_backend_failure_propagates() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend {
            fail: true,
            ..FakeBackend::default()
        };

        let err = dashboard.activate(&mut surface, &mut backend).unwrap_err();
        assert!(matches!(err, DashboardError::ChartBackend(_)));
    }

    #[test]
    fn reactivation_duplicates_nothing_and_leaks_no_instances() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.activate(&mut surface, &mut backend).unwrap();

        assert_eq!(surface.fragments(MountId::StocksGrid).len(), 9);
        assert_eq!(surface.fragments(MountId::ImplementationTimeline).len(), 3);
        // four creates total, but only two instances still live
        assert_eq!(backend.created.len(), 4);
        assert_eq!(backend.live.get(), 2);
    }

    #[test]
    fn fresh_dashboard_is_inactive() {
        let dashboard = Dashboard::with_builtin_plan();
        assert!(!dashboard.is_active());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Host signals
// ═══════════════════════════════════════════════════════════════════

mod host_signals {
    use super::*;

    #[test]
    fn resize_reaches_both_charts() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.resize();
        assert_eq!(backend.resizes.get(), 2);

        dashboard.resize();
        assert_eq!(backend.resizes.get(), 4);
    }

    #[test]
    fn resize_before_activation_is_a_noop() {
        let mut dashboard = Dashboard::with_builtin_plan();
        dashboard.resize(); // must not panic
        assert!(!dashboard.is_active());
    }

    #[test]
    fn visibility_change_is_a_documented_noop() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.visibility_changed(true);
        dashboard.visibility_changed(false);

        assert!(dashboard.is_active());
        assert_eq!(backend.live.get(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Teardown
// ═══════════════════════════════════════════════════════════════════

mod teardown {
    use super::*;

    #[test]
    fn releases_both_chart_instances() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.teardown();

        assert_eq!(backend.live.get(), 0);
        assert!(!dashboard.is_active());
    }

    #[test]
    fn is_idempotent() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.teardown();
        dashboard.teardown();
        assert_eq!(backend.live.get(), 0);
    }

    #[test]
    fn without_activation_is_safe() {
        let mut dashboard = Dashboard::with_builtin_plan();
        dashboard.teardown(); // must not panic
        assert!(!dashboard.is_active());
    }

    #[test]
    fn resize_after_teardown_is_a_noop() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.teardown();
        dashboard.resize();
        assert_eq!(backend.resizes.get(), 0);
    }

    #[test]
    fn dashboard_can_be_reactivated_after_teardown() {
        let mut dashboard = Dashboard::with_builtin_plan();
        let mut surface = FakeSurface::full();
        let mut backend = FakeBackend::default();

        dashboard.activate(&mut surface, &mut backend).unwrap();
        dashboard.teardown();
        dashboard.activate(&mut surface, &mut backend).unwrap();

        assert!(dashboard.is_active());
        assert_eq!(backend.live.get(), 2);
        assert_eq!(surface.fragments(MountId::StocksGrid).len(), 9);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Plan accessor
// ═══════════════════════════════════════════════════════════════════

mod plan_access {
    use super::*;

    #[test]
    fn builtin_plan_is_exposed() {
        let dashboard = Dashboard::with_builtin_plan();
        let plan = dashboard.plan();
        assert_eq!(
            plan.overview.strategy_name,
            "Aggressive Growth with Balanced Risk"
        );
        assert_eq!(plan.overview.total_capital, 250.0);
    }
}
