// Chart handle domain models

pub const DEFAULT_LINE_HEIGHT: u32 = 64;
pub const DEFAULT_DOUGHNUT_HEIGHT: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// The single series-data structure owned by a chart surface:
/// ordered labels with aligned ordered values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Overwrite both sequences in one step.
    pub fn replace(&mut self, labels: Vec<String>, values: Vec<f64>) {
        self.labels = labels;
        self.values = values;
    }
}

/// Immutable construction parameters for one rendering surface.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub container: String,
    pub label: String,
    pub kind: ChartKind,
    pub height: u32,
}

impl ChartSpec {
    pub fn line(container: impl Into<String>, label: impl Into<String>, height: u32) -> Self {
        Self {
            container: container.into(),
            label: label.into(),
            kind: ChartKind::Line,
            height,
        }
    }

    pub fn doughnut(container: impl Into<String>, label: impl Into<String>, height: u32) -> Self {
        Self {
            container: container.into(),
            label: label.into(),
            kind: ChartKind::Doughnut,
            height,
        }
    }

    /// Surface element id, derived the same way for every engine.
    pub fn surface_id(&self) -> String {
        format!("{}_{}", self.container, self.label)
    }
}
