// Port to the charting engine
use crate::domain::chart::{ChartSeries, ChartSpec};
use crate::error::WidgetError;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A surface shared between a controller and its in-flight refresh cycles.
pub type SharedSurface = Arc<Mutex<Box<dyn ChartSurface>>>;

/// One rendering surface bound to a container element. Owns exactly one
/// series-data structure; the renderer overwrites it and requests redraws.
pub trait ChartSurface: Send {
    fn spec(&self) -> &ChartSpec;

    /// Overwrite the bound label sequence and value series.
    fn replace_series(&mut self, labels: Vec<String>, values: Vec<f64>);

    /// Repaint from the currently bound series.
    fn redraw(&mut self);

    fn series(&self) -> &ChartSeries;
}

/// The charting engine capability. Injected into each controller at
/// construction so controllers stay independently testable.
pub trait ChartEngine: Send + Sync {
    /// Create a surface and attach it under the container named in the spec.
    fn create_surface(&self, spec: &ChartSpec) -> Result<Box<dyn ChartSurface>, WidgetError>;
}

pub fn shared(surface: Box<dyn ChartSurface>) -> SharedSurface {
    Arc::new(Mutex::new(surface))
}
