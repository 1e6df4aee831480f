// Time-series chart controller - owns one polling chart instance
use crate::application::metrics_api::{MetricsApi, MetricsQuery};
use crate::application::renderer::render_snapshot;
use crate::application::surface::{shared, ChartEngine, SharedSurface};
use crate::domain::chart::{ChartSpec, DEFAULT_LINE_HEIGHT};
use crate::error::WidgetError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A live time-series chart: one rendering surface plus a recurring refresh
/// loop against the metrics endpoint. Constructed stopped; `start` and `stop`
/// move it between the two states and are both idempotent.
pub struct LiveChart {
    inner: Arc<ChartState>,
    timer: Option<JoinHandle<()>>,
}

struct ChartState {
    api: Arc<dyn MetricsApi>,
    surface: SharedSurface,
    query: MetricsQuery,
    refresh_rate: Duration,
    // Monotonic cycle counter. A resolved fetch is applied only while its
    // cycle is still the latest issued, so the surface always reflects the
    // most recently requested snapshot even when responses resolve out of
    // request order.
    issued: AtomicU64,
}

impl ChartState {
    async fn refresh(self: Arc<Self>) {
        let cycle = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        match self.api.fetch_metrics(&self.query).await {
            Ok(snapshot) => {
                if self.issued.load(Ordering::SeqCst) != cycle {
                    tracing::debug!(cycle, "discarding stale snapshot");
                    return;
                }
                let mut surface = self.surface.lock().await;
                render_snapshot(surface.as_mut(), snapshot);
            }
            Err(err) => {
                // The prior rendered snapshot stays on screen; the next tick
                // fires on schedule regardless.
                tracing::warn!(cycle, error = %err, "refresh cycle failed");
            }
        }
    }
}

impl LiveChart {
    /// Create a line chart under `container` with the default height.
    pub fn new(
        engine: &dyn ChartEngine,
        api: Arc<dyn MetricsApi>,
        container: impl Into<String>,
        label: impl Into<String>,
        query: MetricsQuery,
        refresh_rate: Duration,
    ) -> Result<Self, WidgetError> {
        Self::with_height(engine, api, container, label, query, refresh_rate, DEFAULT_LINE_HEIGHT)
    }

    /// Create a line chart and perform one immediate fire-and-forget
    /// fetch-and-render cycle. Construction never blocks on the network.
    pub fn with_height(
        engine: &dyn ChartEngine,
        api: Arc<dyn MetricsApi>,
        container: impl Into<String>,
        label: impl Into<String>,
        query: MetricsQuery,
        refresh_rate: Duration,
        height: u32,
    ) -> Result<Self, WidgetError> {
        let spec = ChartSpec::line(container, label, height);
        let surface = shared(engine.create_surface(&spec)?);
        let inner = Arc::new(ChartState {
            api,
            surface,
            query,
            refresh_rate,
            issued: AtomicU64::new(0),
        });

        tokio::spawn(Arc::clone(&inner).refresh());

        Ok(Self { inner, timer: None })
    }

    /// Begin polling. A no-op while a refresh timer is already active.
    pub fn start(&mut self) -> &mut Self {
        if self.timer.is_none() {
            self.stop();
            let inner = Arc::clone(&self.inner);
            self.timer = Some(tokio::spawn(async move {
                let mut ticker = tokio::time::interval(inner.refresh_rate);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick completes immediately; construction already
                // rendered once, so polling starts one interval from now.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    // Cycles run detached: a slow round-trip must not hold up
                    // the next scheduled tick.
                    tokio::spawn(Arc::clone(&inner).refresh());
                }
            }));
        }
        self
    }

    /// Cancel the refresh timer if one is active. In-flight cycles are not
    /// cancelled; only future ticks are prevented.
    pub fn stop(&mut self) -> &mut Self {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self
    }

    /// Tear the controller down, cancelling any active timer.
    pub fn dispose(mut self) {
        self.stop();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The surface this controller renders into.
    pub fn surface(&self) -> SharedSurface {
        Arc::clone(&self.inner.surface)
    }
}

impl Drop for LiveChart {
    fn drop(&mut self) {
        self.stop();
    }
}
