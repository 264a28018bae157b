//! Application State
//!
//! Shared state across all handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use health_agent_agent::{load_knowledge, AgentConfig, Collaborators, HealthAgent};
use health_agent_config::Settings;
use health_agent_core::{AlertLog, AnalyticsSink, MessageTransport, StatsProvider, Translator};
use health_agent_integrations::{
    create_transport, DiseaseShClient, InMemoryAlertLog, InMemoryAnalyticsStore,
};
use health_agent_text_processing::create_translator;

use crate::ServerError;

/// Collaborators behind the agent and the endpoints
#[derive(Clone)]
pub struct Services {
    pub stats: Arc<dyn StatsProvider>,
    pub translator: Arc<dyn Translator>,
    pub analytics: Arc<dyn AnalyticsSink>,
    pub alerts: Arc<dyn AlertLog>,
    pub whatsapp: Arc<dyn MessageTransport>,
    pub sms: Arc<dyn MessageTransport>,
}

impl Services {
    /// Real collaborators as configured
    pub fn from_settings(settings: &Settings) -> Result<Self, ServerError> {
        let stats = DiseaseShClient::from_config(&settings.stats)
            .map_err(|e| ServerError::Startup(format!("statistics client: {}", e)))?;

        Ok(Self {
            stats: Arc::new(stats),
            translator: create_translator(&settings.translation),
            analytics: Arc::new(InMemoryAnalyticsStore::with_capacity(
                settings.analytics.max_records,
            )),
            alerts: Arc::new(InMemoryAlertLog::new()),
            whatsapp: create_transport(&settings.messaging, &settings.messaging.whatsapp_from),
            sms: create_transport(&settings.messaging, &settings.messaging.sms_sender()),
        })
    }
}

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub agent: Arc<HealthAgent>,
    pub services: Services,
}

impl AppState {
    /// Load the knowledge store and wire the agent
    pub fn new(config: Settings, services: Services) -> Result<Self, ServerError> {
        let (store, matcher) = load_knowledge(config.knowledge.path.as_deref().map(Path::new))?;

        let agent = HealthAgent::new(
            AgentConfig::from_settings(&config),
            store,
            matcher,
            Collaborators {
                stats: services.stats.clone(),
                translator: services.translator.clone(),
                analytics: services.analytics.clone(),
            },
        );

        Ok(Self {
            config: Arc::new(config),
            agent: Arc::new(agent),
            services,
        })
    }

    pub fn from_settings(config: Settings) -> Result<Self, ServerError> {
        let services = Services::from_settings(&config)?;
        Self::new(config, services)
    }

    /// Timeout for the statistics probe in `/health`
    pub fn stats_timeout(&self) -> Duration {
        Duration::from_secs(self.config.stats.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};
    use health_agent_core::{Channel, QueryContext};

    #[tokio::test]
    async fn test_analytics_store_drops_oldest_interactions() {
        let mut settings = Settings::default();
        settings.analytics.max_records = 3;
        settings.monitor.enabled = false;
        let state = AppState::from_settings(settings).unwrap();

        for i in 0..5 {
            let ctx = QueryContext::new(format!("query {}", i), format!("session-{}", i));
            state.agent.process(ctx, Channel::Webhook).await;
        }

        let analytics = &state.services.analytics;
        assert_eq!(analytics.interaction_count().await.unwrap(), 3);

        let since = Utc::now() - ChronoDuration::days(1);
        let queries: Vec<String> = analytics
            .top_queries(since, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.query)
            .collect();
        assert!(!queries.iter().any(|q| q == "query 0" || q == "query 1"));
        assert!(queries.iter().any(|q| q == "query 4"));
    }
}
