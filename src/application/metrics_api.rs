// Port to the remote torrent metrics API
use crate::domain::snapshot::MetricsSnapshot;
use crate::error::WidgetError;
use async_trait::async_trait;

/// Immutable query parameters for one time-series chart, captured at
/// controller construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MetricsQuery {
    /// Size of the time window, counted backwards from now, in seconds.
    pub seconds_from_now: i64,
    /// Number of samples requested across the window.
    pub count: u32,
    /// Time-axis label format, interpreted by the remote API.
    pub time_axis_format: String,
}

impl MetricsQuery {
    pub fn new(seconds_from_now: i64, count: u32, time_axis_format: impl Into<String>) -> Self {
        Self {
            seconds_from_now,
            count,
            time_axis_format: time_axis_format.into(),
        }
    }
}

#[async_trait]
pub trait MetricsApi: Send + Sync {
    /// Total tracked torrent count.
    async fn fetch_count(&self) -> Result<u64, WidgetError>;

    /// Time-series snapshot for the given query window.
    async fn fetch_metrics(&self, query: &MetricsQuery) -> Result<MetricsSnapshot, WidgetError>;

    /// Category distribution snapshot.
    async fn fetch_categories(&self) -> Result<MetricsSnapshot, WidgetError>;
}
