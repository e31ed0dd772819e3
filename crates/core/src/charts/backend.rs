use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;
use crate::render::fragment::MountId;

/// What kind of widget the backend should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Proportional donut chart. Each series holds a single value,
    /// one series per slice, colored per slice.
    Donut,
    /// Multi-series line chart. Each series holds one value per label.
    Line,
}

/// Where the backend should place the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// One named, colored series of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend/tooltip name for this series
    pub name: String,

    /// The values, parallel to `ChartSpec::labels` (a single value for
    /// donut slices)
    pub values: Vec<f64>,

    /// Stroke/fill color as a CSS color string
    pub color: String,
}

/// Presentation hints for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Legend placement
    pub legend_position: LegendPosition,

    /// Format tooltip values as "€" + number
    pub currency_tooltips: bool,

    /// Format y-axis ticks as "€" + number (line charts)
    pub currency_ticks: bool,

    /// X-axis title, if the chart has axes
    pub x_axis_title: Option<String>,

    /// Y-axis title, if the chart has axes
    pub y_axis_title: Option<String>,

    /// Donut hole size as a percentage of the radius
    pub cutout_pct: Option<u8>,
}

/// Everything the charting backend needs to draw one chart.
///
/// This is the only wire-like boundary in the system: the core builds
/// the spec, the host's backend consumes it. Serde-derived so hosts
/// can hand it across an FFI/JS boundary as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart kind tag
    pub kind: ChartKind,

    /// Category labels (donut slices or x-axis points)
    pub labels: Vec<String>,

    /// The data series
    pub series: Vec<Series>,

    /// Presentation hints
    pub options: ChartOptions,
}

/// The external charting library, abstracted behind a trait so the
/// core never touches a real canvas. A failed `create` surfaces as
/// `DashboardError::ChartBackend` and propagates to the host
/// untranslated.
pub trait ChartBackend {
    /// Draw a chart into the given mount point and return a handle to
    /// the live instance.
    fn create(
        &mut self,
        mount: MountId,
        spec: &ChartSpec,
    ) -> Result<Box<dyn ChartInstance>, DashboardError>;
}

/// A live chart bound to a mount point.
pub trait ChartInstance {
    /// Re-measure after the display surface changed size.
    fn resize(&mut self);

    /// Release the instance's resources. Called at most once per
    /// instance; adapters drop the handle afterwards.
    fn destroy(&mut self);
}
