use crate::charts::backend::{
    ChartBackend, ChartInstance, ChartKind, ChartOptions, ChartSpec, LegendPosition, Series,
};
use crate::errors::DashboardError;
use crate::models::projection::ProjectionPoint;
use crate::render::fragment::MountId;

const CONSERVATIVE_COLOR: &str = "#ECEBD5";
const BASE_CASE_COLOR: &str = "#1FB8CD";
const OPTIMISTIC_COLOR: &str = "#5D878F";

/// Projects the growth projections into a three-series line chart and
/// owns the resulting chart instance.
#[derive(Default)]
pub struct GrowthChartAdapter {
    instance: Option<Box<dyn ChartInstance>>,
}

impl GrowthChartAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Build the line spec: "Year N" labels on the x-axis, one series
    /// per scenario.
    #[must_use]
    pub fn spec(projections: &[ProjectionPoint]) -> ChartSpec {
        let labels: Vec<String> = projections
            .iter()
            .map(|p| format!("Year {}", p.year))
            .collect();

        let series = vec![
            Series {
                name: "Conservative (12% CAGR)".to_string(),
                values: projections.iter().map(|p| p.conservative).collect(),
                color: CONSERVATIVE_COLOR.to_string(),
            },
            Series {
                name: "Base Case (18% CAGR)".to_string(),
                values: projections.iter().map(|p| p.base_case).collect(),
                color: BASE_CASE_COLOR.to_string(),
            },
            Series {
                name: "Optimistic (25% CAGR)".to_string(),
                values: projections.iter().map(|p| p.optimistic).collect(),
                color: OPTIMISTIC_COLOR.to_string(),
            },
        ];

        ChartSpec {
            kind: ChartKind::Line,
            labels,
            series,
            options: ChartOptions {
                legend_position: LegendPosition::Top,
                currency_tooltips: true,
                currency_ticks: true,
                x_axis_title: Some("Investment Timeline".to_string()),
                y_axis_title: Some("Portfolio Value (€)".to_string()),
                cutout_pct: None,
            },
        }
    }

    /// Create the chart. Any previously created instance is destroyed
    /// first, so exactly one instance is ever live per adapter.
    pub fn create(
        &mut self,
        backend: &mut dyn ChartBackend,
        projections: &[ProjectionPoint],
    ) -> Result<(), DashboardError> {
        self.destroy();
        let spec = Self::spec(projections);
        self.instance = Some(backend.create(MountId::GrowthChart, &spec)?);
        Ok(())
    }

    /// Re-measure the chart. No-op when no instance exists.
    pub fn resize(&mut self) {
        if let Some(instance) = self.instance.as_mut() {
            instance.resize();
        }
    }

    /// Release the chart instance. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.destroy();
        }
    }

    /// Whether a chart instance is currently live.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.instance.is_some()
    }
}
