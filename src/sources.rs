use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::Result;

/// Raw catalog response as returned from external APIs. The shape is
/// validated downstream, so sources hand back untyped JSON.
pub type RawResponse = serde_json::Value;

/// Core trait that all category data sources must implement.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Unique identifier for this source
    fn source_name(&self) -> &'static str;

    /// Fetch the raw category payload from this data source
    async fn fetch_categories(&self) -> Result<RawResponse>;
}

/// Production source backed by an HTTP catalog endpoint.
pub struct HttpCategorySource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCategorySource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CategorySource for HttpCategorySource {
    fn source_name(&self) -> &'static str {
        "catalog_http"
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_categories(&self) -> Result<RawResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let payload: RawResponse = response.json().await?;
        debug!("fetched catalog payload");
        Ok(payload)
    }
}

/// In-memory source wrapping a fixed payload, for development and testing.
pub struct StaticCategorySource {
    payload: RawResponse,
}

impl StaticCategorySource {
    pub fn new(payload: RawResponse) -> Self {
        Self { payload }
    }
}

#[async_trait]
impl CategorySource for StaticCategorySource {
    fn source_name(&self) -> &'static str {
        "catalog_static"
    }

    async fn fetch_categories(&self) -> Result<RawResponse> {
        Ok(self.payload.clone())
    }
}
