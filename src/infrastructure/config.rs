use crate::domain::chart::{DEFAULT_DOUGHNUT_HEIGHT, DEFAULT_LINE_HEIGHT};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Origin of the torrent metrics API, e.g. "http://127.0.0.1:8080".
    pub origin: String,
    #[serde(default)]
    pub charts: Vec<LiveChartConfig>,
    #[serde(default)]
    pub category_charts: Vec<CategoryChartConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LiveChartConfig {
    pub container: String,
    pub label: String,
    pub seconds_from_now: i64,
    pub count: u32,
    pub time_axis_format: String,
    pub refresh_rate_ms: u64,
    #[serde(default = "default_line_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoryChartConfig {
    pub container: String,
    pub label: String,
    #[serde(default = "default_doughnut_height")]
    pub height: u32,
}

fn default_line_height() -> u32 {
    DEFAULT_LINE_HEIGHT
}

fn default_doughnut_height() -> u32 {
    DEFAULT_DOUGHNUT_HEIGHT
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
