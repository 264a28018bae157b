//! Health Agent
//!
//! One pipeline shared by every inbound channel:
//! detect language -> route -> assemble -> translate -> shape for channel ->
//! record interaction.

use std::sync::Arc;
use std::time::{Duration, Instant};

use health_agent_config::Settings;
use health_agent_core::{
    AnalyticsSink, Channel, InteractionRecord, QueryContext, ResponseEnvelope, StatsProvider,
    Translator,
};
use health_agent_knowledge::{KnowledgeStore, LexicalMatcher};
use health_agent_text_processing::{translate_reply, truncate_for_sms, LanguageDetector};

use crate::assembler::{AssemblerConfig, ResponseAssembler};
use crate::router::{Branch, IntentRouter};

/// Agent configuration
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub assembler: AssemblerConfig,
    /// Character limit for SMS replies
    pub sms_max_length: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            assembler: AssemblerConfig::default(),
            sms_max_length: 1600,
        }
    }
}

impl AgentConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            assembler: AssemblerConfig {
                match_threshold: settings.classifier.match_threshold,
                default_confidence: settings.classifier.default_confidence,
                default_region: settings.stats.default_region.clone(),
                stats_timeout: Duration::from_secs(settings.stats.timeout_seconds),
            },
            sms_max_length: settings.messaging.sms_max_length,
        }
    }
}

/// Collaborators the agent calls out to
pub struct Collaborators {
    pub stats: Arc<dyn StatsProvider>,
    pub translator: Arc<dyn Translator>,
    pub analytics: Arc<dyn AnalyticsSink>,
}

pub struct HealthAgent {
    router: IntentRouter,
    detector: LanguageDetector,
    assembler: ResponseAssembler,
    translator: Arc<dyn Translator>,
    analytics: Arc<dyn AnalyticsSink>,
    store: Arc<KnowledgeStore>,
    sms_max_length: usize,
}

impl HealthAgent {
    pub fn new(
        config: AgentConfig,
        store: Arc<KnowledgeStore>,
        matcher: Arc<LexicalMatcher>,
        collaborators: Collaborators,
    ) -> Self {
        let assembler = ResponseAssembler::new(
            store.clone(),
            matcher,
            collaborators.stats,
            config.assembler,
        );

        Self {
            router: IntentRouter::new(),
            detector: LanguageDetector::new(),
            assembler,
            translator: collaborators.translator,
            analytics: collaborators.analytics,
            store,
            sms_max_length: config.sms_max_length,
        }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    pub fn analytics(&self) -> &Arc<dyn AnalyticsSink> {
        &self.analytics
    }

    /// Branch a query would take, after language detection
    pub fn route(&self, ctx: &QueryContext) -> Branch {
        self.router.route(ctx)
    }

    /// Answer one query
    ///
    /// Never fails: collaborator errors degrade to fallback texts or
    /// untranslated replies, and analytics errors are only logged.
    pub async fn process(&self, mut ctx: QueryContext, channel: Channel) -> ResponseEnvelope {
        let started = Instant::now();

        ctx.detected_language = self.detector.detect(&ctx.raw_text);
        let branch = self.router.route(&ctx);

        tracing::debug!(
            session = %ctx.session_key,
            channel = %channel,
            language = %ctx.detected_language,
            branch = %branch,
            "Routing query"
        );

        let mut envelope = self.assembler.assemble(branch, &ctx).await;

        let reply = translate_reply(
            self.translator.as_ref(),
            &envelope.text,
            ctx.detected_language,
            envelope.language,
        )
        .await;
        if reply.degraded {
            metrics::counter!(
                "health_agent_collaborator_failures_total",
                "collaborator" => "translation"
            )
            .increment(1);
        }
        envelope.text = reply.text;
        envelope.language = reply.language;

        if channel.truncates() {
            envelope.text = truncate_for_sms(&envelope.text, self.sms_max_length);
        }

        self.record(&ctx, &envelope, channel).await;

        metrics::counter!("health_agent_responses_total", "source" => envelope.source.as_str())
            .increment(1);
        metrics::histogram!("health_agent_pipeline_seconds", "channel" => channel.as_str())
            .record(started.elapsed().as_secs_f64());

        tracing::info!(
            session = %ctx.session_key,
            channel = %channel,
            branch = %branch,
            source = %envelope.source,
            confidence = envelope.confidence,
            latency_ms = started.elapsed().as_millis() as u64,
            "Query answered"
        );

        envelope
    }

    async fn record(&self, ctx: &QueryContext, envelope: &ResponseEnvelope, channel: Channel) {
        let record = InteractionRecord::new(
            ctx.session_key.clone(),
            ctx.raw_text.clone(),
            &envelope.text,
            envelope.confidence,
            envelope.language,
            envelope.source,
            channel,
        );

        if let Err(e) = self.analytics.record(record).await {
            tracing::warn!(session = %ctx.session_key, error = %e, "Failed to record interaction");
            metrics::counter!(
                "health_agent_collaborator_failures_total",
                "collaborator" => "analytics"
            )
            .increment(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_settings() {
        let mut settings = Settings::default();
        settings.messaging.sms_max_length = 480;
        settings.classifier.match_threshold = 0.4;

        let config = AgentConfig::from_settings(&settings);
        assert_eq!(config.sms_max_length, 480);
        assert!((config.assembler.match_threshold - 0.4).abs() < f32::EPSILON);
        assert_eq!(config.assembler.default_region, "india");
        assert_eq!(config.assembler.stats_timeout, Duration::from_secs(5));
    }
}
