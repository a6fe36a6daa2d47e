//! HTTP implementation of the health data source

use crate::api::types::{DateRange, Insights, JournalEntry, MetricRecord, SleepRecord};
use crate::api::HealthDataSource;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Per-request timeout; a slow backend surfaces as a fetch failure, never a hang
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the backend base URL
pub const BASE_URL_ENV: &str = "MINDBODY_API_BASE";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

/// Health data source backed by the REST backend
pub struct HttpHealthDataSource {
    client: Client,
    base_url: Url,
}

impl HttpHealthDataSource {
    /// Create a source against an explicit base URL
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
        }
    }

    /// Create a source from `MINDBODY_API_BASE`, falling back to localhost
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::from_base_str(&raw)
    }

    /// Create a source from a base URL string
    pub fn from_base_str(raw: &str) -> Result<Self> {
        let base_url = Url::parse(raw)
            .map_err(|e| AppError::Config(format!("Invalid {}: {}", BASE_URL_ENV, e)))?;
        Ok(Self::new(base_url))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, range: &DateRange) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| AppError::Config(format!("Invalid endpoint path '{}': {}", path, e)))?;

        let response = self
            .client
            .get(url)
            .query(&range.as_query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl HealthDataSource for HttpHealthDataSource {
    async fn get_insights(&self, range: &DateRange) -> Result<Insights> {
        self.get("insights/", range).await
    }

    async fn get_metrics(&self, range: &DateRange) -> Result<Vec<MetricRecord>> {
        self.get("metrics/", range).await
    }

    async fn get_sleep(&self, range: &DateRange) -> Result<Vec<SleepRecord>> {
        self.get("sleep/", range).await
    }

    async fn get_journal(&self, range: &DateRange) -> Result<Vec<JournalEntry>> {
        self.get("journal/", range).await
    }
}
