// Headless chart engine backed by tracing output
use crate::application::surface::{ChartEngine, ChartSurface};
use crate::domain::chart::{ChartSeries, ChartSpec};
use crate::error::WidgetError;

/// Chart engine for headless hosts: surfaces keep their bound series in
/// memory and emit one tracing line per redraw instead of painting pixels.
#[derive(Debug, Default)]
pub struct LogChartEngine;

impl LogChartEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ChartEngine for LogChartEngine {
    fn create_surface(&self, spec: &ChartSpec) -> Result<Box<dyn ChartSurface>, WidgetError> {
        tracing::debug!(
            surface = %spec.surface_id(),
            kind = ?spec.kind,
            height = spec.height,
            "attaching chart surface"
        );
        Ok(Box::new(LogSurface {
            spec: spec.clone(),
            series: ChartSeries::default(),
        }))
    }
}

pub struct LogSurface {
    spec: ChartSpec,
    series: ChartSeries,
}

impl ChartSurface for LogSurface {
    fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    fn replace_series(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.series.replace(labels, values);
    }

    fn redraw(&mut self) {
        tracing::info!(
            surface = %self.spec.surface_id(),
            points = self.series.values.len(),
            "chart redrawn"
        );
    }

    fn series(&self) -> &ChartSeries {
        &self.series
    }
}
