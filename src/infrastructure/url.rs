// Request URL builders for the torrent metrics API
use crate::application::metrics_api::MetricsQuery;

pub fn torrent_count_url(origin: &str) -> String {
    format!("{origin}/api/torrent/count")
}

pub fn torrent_metrics_url(origin: &str, query: &MetricsQuery) -> String {
    format!(
        "{}/api/torrent/metrics?SecondsFromNow={}&Count={}&TimeAxisFormat={}",
        origin,
        query.seconds_from_now,
        query.count,
        urlencoding::encode(&query.time_axis_format)
    )
}

pub fn torrent_categories_url(origin: &str) -> String {
    format!("{origin}/api/torrent/categories")
}
