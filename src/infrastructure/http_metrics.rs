// HTTP metrics API client
use crate::application::metrics_api::{MetricsApi, MetricsQuery};
use crate::domain::snapshot::MetricsSnapshot;
use crate::error::WidgetError;
use crate::infrastructure::url::{
    torrent_categories_url, torrent_count_url, torrent_metrics_url,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpMetricsApi {
    origin: String,
    client: reqwest::Client,
}

impl HttpMetricsApi {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>, WidgetError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WidgetError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_snapshot(&self, url: &str) -> Result<MetricsSnapshot, WidgetError> {
        let body = self.fetch_body(url).await?;
        MetricsSnapshot::from_slice(&body)
    }
}

#[async_trait]
impl MetricsApi for HttpMetricsApi {
    async fn fetch_count(&self) -> Result<u64, WidgetError> {
        let body = self.fetch_body(&torrent_count_url(&self.origin)).await?;
        serde_json::from_slice(&body).map_err(|e| WidgetError::MalformedPayload(e.to_string()))
    }

    async fn fetch_metrics(&self, query: &MetricsQuery) -> Result<MetricsSnapshot, WidgetError> {
        self.fetch_snapshot(&torrent_metrics_url(&self.origin, query))
            .await
    }

    async fn fetch_categories(&self) -> Result<MetricsSnapshot, WidgetError> {
        self.fetch_snapshot(&torrent_categories_url(&self.origin))
            .await
    }
}
