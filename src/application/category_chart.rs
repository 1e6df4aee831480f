// Category chart controller - single-shot doughnut chart
use crate::application::metrics_api::MetricsApi;
use crate::application::renderer::render_snapshot;
use crate::application::surface::{shared, ChartEngine, SharedSurface};
use crate::domain::chart::{ChartSpec, DEFAULT_DOUGHNUT_HEIGHT};
use crate::error::WidgetError;
use std::sync::Arc;

/// A categorical chart that fetches the category distribution exactly once
/// at construction. No polling and no timer; the rendered content only
/// changes if the page constructs a new instance.
pub struct CategoryChart {
    surface: SharedSurface,
}

impl CategoryChart {
    /// Create a doughnut chart under `container` with the default height.
    pub fn new(
        engine: &dyn ChartEngine,
        api: Arc<dyn MetricsApi>,
        container: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self, WidgetError> {
        Self::with_height(engine, api, container, label, DEFAULT_DOUGHNUT_HEIGHT)
    }

    pub fn with_height(
        engine: &dyn ChartEngine,
        api: Arc<dyn MetricsApi>,
        container: impl Into<String>,
        label: impl Into<String>,
        height: u32,
    ) -> Result<Self, WidgetError> {
        let spec = ChartSpec::doughnut(container, label, height);
        let surface = shared(engine.create_surface(&spec)?);

        let render_target = Arc::clone(&surface);
        tokio::spawn(async move {
            match api.fetch_categories().await {
                Ok(snapshot) => {
                    let mut surface = render_target.lock().await;
                    render_snapshot(surface.as_mut(), snapshot);
                }
                Err(err) => tracing::warn!(error = %err, "category fetch failed"),
            }
        });

        Ok(Self { surface })
    }

    pub fn surface(&self) -> SharedSurface {
        Arc::clone(&self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::metrics_api::MetricsQuery;
    use crate::domain::chart::ChartKind;
    use crate::domain::snapshot::MetricsSnapshot;
    use crate::presentation::log_surface::LogChartEngine;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingApi {
        category_fetches: AtomicUsize,
    }

    #[async_trait]
    impl MetricsApi for CountingApi {
        async fn fetch_count(&self) -> Result<u64, WidgetError> {
            Ok(0)
        }

        async fn fetch_metrics(
            &self,
            _query: &MetricsQuery,
        ) -> Result<MetricsSnapshot, WidgetError> {
            unimplemented!("not used by category charts")
        }

        async fn fetch_categories(&self) -> Result<MetricsSnapshot, WidgetError> {
            self.category_fetches.fetch_add(1, Ordering::SeqCst);
            MetricsSnapshot::new(
                vec!["video".into(), "audio".into()],
                vec![120.0, 45.0],
            )
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_exactly_once_per_construction() {
        let api = Arc::new(CountingApi {
            category_fetches: AtomicUsize::new(0),
        });
        let chart = CategoryChart::new(
            &LogChartEngine::new(),
            Arc::clone(&api) as Arc<dyn MetricsApi>,
            "dashboard",
            "Categories",
        )
        .unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(api.category_fetches.load(Ordering::SeqCst), 1);

        let surface = chart.surface();
        let surface = surface.lock().await;
        assert_eq!(surface.spec().kind, ChartKind::Doughnut);
        assert_eq!(surface.series().labels, vec!["video", "audio"]);
        assert_eq!(surface.series().values, vec![120.0, 45.0]);
    }
}
