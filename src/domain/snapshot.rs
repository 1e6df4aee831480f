// Metrics snapshot domain model
use crate::error::WidgetError;
use serde::Deserialize;

/// One fetched pair of parallel label/value sequences from the metrics API.
/// Consumed immediately by the renderer; never retained by a controller.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl MetricsSnapshot {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Result<Self, WidgetError> {
        let snapshot = Self { labels, values };
        snapshot.check_aligned()?;
        Ok(snapshot)
    }

    /// Decode a raw response body. The remote API is not trusted to keep
    /// `labels` and `values` aligned, so decoding validates before anything
    /// reaches a chart surface.
    pub fn from_slice(body: &[u8]) -> Result<Self, WidgetError> {
        let snapshot: Self = serde_json::from_slice(body)
            .map_err(|e| WidgetError::MalformedPayload(e.to_string()))?;
        snapshot.check_aligned()?;
        Ok(snapshot)
    }

    fn check_aligned(&self) -> Result<(), WidgetError> {
        if self.labels.len() != self.values.len() {
            return Err(WidgetError::MalformedPayload(format!(
                "labels/values length mismatch: {} labels, {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
