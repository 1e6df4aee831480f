// Main entry point - Headless dashboard runner
use std::sync::Arc;
use std::time::Duration;

use torrent_livechart::application::metrics_api::{MetricsApi, MetricsQuery};
use torrent_livechart::application::{category_chart::CategoryChart, live_chart::LiveChart};
use torrent_livechart::infrastructure::config::load_dashboard_config;
use torrent_livechart::infrastructure::http_metrics::HttpMetricsApi;
use torrent_livechart::presentation::log_surface::LogChartEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_dashboard_config()?;

    let api = Arc::new(HttpMetricsApi::new(config.origin.clone()));
    let engine = LogChartEngine::new();

    let mut live_charts = Vec::new();
    for chart in &config.charts {
        let query = MetricsQuery::new(
            chart.seconds_from_now,
            chart.count,
            chart.time_axis_format.clone(),
        );
        let mut live = LiveChart::with_height(
            &engine,
            api.clone(),
            chart.container.clone(),
            chart.label.clone(),
            query,
            Duration::from_millis(chart.refresh_rate_ms),
            chart.height,
        )?;
        live.start();
        live_charts.push(live);
    }

    let mut category_charts = Vec::new();
    for chart in &config.category_charts {
        category_charts.push(CategoryChart::with_height(
            &engine,
            api.clone(),
            chart.container.clone(),
            chart.label.clone(),
            chart.height,
        )?);
    }

    let count = api.fetch_count().await;
    match count {
        Ok(count) => tracing::info!(count, "connected to {}", config.origin),
        Err(err) => tracing::warn!(error = %err, "metrics API not reachable yet"),
    }

    println!(
        "Polling {} live chart(s) against {} - Ctrl-C to stop",
        live_charts.len(),
        config.origin
    );

    tokio::signal::ctrl_c().await?;

    for chart in &mut live_charts {
        chart.stop();
    }

    Ok(())
}
