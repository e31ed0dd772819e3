use crate::charts::backend::{
    ChartBackend, ChartInstance, ChartKind, ChartOptions, ChartSpec, LegendPosition, Series,
};
use crate::errors::DashboardError;
use crate::models::allocation::AllocationBucket;
use crate::render::fragment::MountId;

/// Slice palette, in bucket order (stocks, funds, crypto).
const PALETTE: [&str; 3] = ["#1FB8CD", "#FFC185", "#B4413C"];

/// Projects the asset-allocation buckets into a donut chart and owns
/// the resulting chart instance.
#[derive(Default)]
pub struct AllocationChartAdapter {
    instance: Option<Box<dyn ChartInstance>>,
}

impl AllocationChartAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self { instance: None }
    }

    /// Build the donut spec: one slice per bucket, labeled
    /// "<asset class> (<pct>%)" and sized by the bucket amount.
    #[must_use]
    pub fn spec(buckets: &[AllocationBucket]) -> ChartSpec {
        let labels: Vec<String> = buckets
            .iter()
            .map(|b| format!("{} ({}%)", b.asset_class, b.percentage))
            .collect();

        let series: Vec<Series> = buckets
            .iter()
            .zip(PALETTE.iter().cycle())
            .map(|(bucket, color)| Series {
                name: format!("{} ({}%)", bucket.asset_class, bucket.percentage),
                values: vec![bucket.amount],
                color: (*color).to_string(),
            })
            .collect();

        ChartSpec {
            kind: ChartKind::Donut,
            labels,
            series,
            options: ChartOptions {
                legend_position: LegendPosition::Bottom,
                currency_tooltips: true,
                currency_ticks: false,
                x_axis_title: None,
                y_axis_title: None,
                cutout_pct: Some(65),
            },
        }
    }

    /// Create the chart. Any previously created instance is destroyed
    /// first, so exactly one instance is ever live per adapter.
    pub fn create(
        &mut self,
        backend: &mut dyn ChartBackend,
        buckets: &[AllocationBucket],
    ) -> Result<(), DashboardError> {
        self.destroy();
        let spec = Self::spec(buckets);
        self.instance = Some(backend.create(MountId::AllocationChart, &spec)?);
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
