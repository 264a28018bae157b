//! Disease statistics client (disease.sh compatible)

use std::time::Duration;

use async_trait::async_trait;
use health_agent_config::StatsConfig;
use health_agent_core::{DiseaseStats, StatsProvider};

use crate::IntegrationError;

/// `GET {base_url}/countries/{region}`
pub struct DiseaseShClient {
    client: reqwest::Client,
    base_url: String,
}

impl DiseaseShClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, IntegrationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IntegrationError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &StatsConfig) -> Result<Self, IntegrationError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn country_url(&self, region: &str) -> String {
        format!("{}/countries/{}", self.base_url, region.trim().to_lowercase())
    }

    pub async fn fetch(&self, region: &str) -> Result<DiseaseStats, IntegrationError> {
        if region.trim().is_empty() {
            return Err(IntegrationError::InvalidRequest("empty region".to_string()));
        }

        let url = self.country_url(region);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntegrationError::from_status(status, region));
        }

        let stats: DiseaseStats = response.json().await?;
        Ok(stats)
    }
}

#[async_trait]
impl StatsProvider for DiseaseShClient {
    async fn fetch_stats(&self, region: &str) -> health_agent_core::Result<DiseaseStats> {
        self.fetch(region).await.map_err(|e| {
            tracing::warn!(region = %region, error = %e, "Statistics lookup failed");
            health_agent_core::Error::Stats(e.to_string())
        })
    }

    fn name(&self) -> &str {
        "disease.sh"
    }
}
