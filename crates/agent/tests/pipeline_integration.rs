//! End-to-end tests for the query pipeline
//!
//! detect -> route -> assemble -> translate -> shape -> record, with mock
//! collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use health_agent_agent::{load_knowledge, templates, AgentConfig, Collaborators, HealthAgent};
use health_agent_core::{
    AnalyticsSink, Channel, DiseaseStats, Error, Language, QueryContext, ResponseSource, Result,
    StatsProvider, Translator,
};
use health_agent_integrations::InMemoryAnalyticsStore;
use health_agent_text_processing::CONTINUATION_NOTICE;

struct OfflineStats;

#[async_trait]
impl StatsProvider for OfflineStats {
    async fn fetch_stats(&self, _region: &str) -> Result<DiseaseStats> {
        Err(Error::Stats("connection refused".into()))
    }

    fn name(&self) -> &str {
        "offline"
    }
}

/// Prefixes replies with `[hi]`, or fails when `fail` is set
struct TaggingTranslator {
    calls: AtomicUsize,
    fail: bool,
}

impl TaggingTranslator {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail,
        })
    }
}

#[async_trait]
impl Translator for TaggingTranslator {
    async fn translate(&self, text: &str, _from: Language, _to: Language) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Translation("service down".into()));
        }
        Ok(format!("[hi] {}", text))
    }

    fn name(&self) -> &str {
        "tagging"
    }
}

struct Harness {
    agent: HealthAgent,
    translator: Arc<TaggingTranslator>,
    analytics: Arc<InMemoryAnalyticsStore>,
}

fn harness_with(config: AgentConfig, translator_fails: bool) -> Harness {
    let (store, matcher) = load_knowledge(None).unwrap();
    let translator = TaggingTranslator::new(translator_fails);
    let analytics = Arc::new(InMemoryAnalyticsStore::new());

    let agent = HealthAgent::new(
        config,
        store,
        matcher,
        Collaborators {
            stats: Arc::new(OfflineStats),
            translator: translator.clone(),
            analytics: analytics.clone(),
        },
    );

    Harness {
        agent,
        translator,
        analytics,
    }
}

fn harness() -> Harness {
    harness_with(AgentConfig::default(), false)
}

#[tokio::test]
async fn test_explicit_malaria_symptoms() {
    let h = harness();
    let ctx = QueryContext::new("tell me about it", "abc")
        .with_intent("symptoms.query")
        .with_parameter("disease", "malaria");

    let reply = h.agent.process(ctx, Channel::Webhook).await;

    assert!(reply.text.contains("MALARIA"));
    assert!(reply.confidence >= 0.9);
    assert_eq!(reply.source, ResponseSource::KnowledgeBase);
}

#[tokio::test]
async fn test_romanised_hindi_gets_default_text() {
    let h = harness();
    let reply = h
        .agent
        .process(QueryContext::new("covid ke lakshan", "abc"), Channel::Webhook)
        .await;

    assert_eq!(reply.text, templates::DEFAULT_HELP);
    assert_eq!(reply.source, ResponseSource::Default);
    assert!((reply.confidence - 0.1).abs() < 1e-6);
}

#[tokio::test]
async fn test_symptom_description_matches_malaria() {
    let h = harness();
    let reply = h
        .agent
        .process(
            QueryContext::new("fever chills headache nausea", "abc"),
            Channel::WhatsApp,
        )
        .await;

    assert_eq!(reply.source, ResponseSource::MlMatch);
    assert!(reply.confidence > 0.3);
    assert!(reply.text.contains("MALARIA"));
}

#[tokio::test]
async fn test_devanagari_reply_is_not_translated() {
    let h = harness();
    let ctx = QueryContext::new("मदद चाहिए", "abc").with_intent("emergency.query");

    let reply = h.agent.process(ctx, Channel::Webhook).await;

    assert_eq!(reply.text, templates::EMERGENCY);
    assert_eq!(reply.source, ResponseSource::Emergency);
    assert_eq!(h.translator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_english_reply_translated_for_hindi_user() {
    let h = harness();
    let ctx = QueryContext::new("टाइफाइड से बचाव", "abc").with_parameter("disease", "typhoid");

    let reply = h.agent.process(ctx, Channel::Webhook).await;

    assert_eq!(reply.source, ResponseSource::Fallback);
    assert!(reply.text.starts_with("[hi] I can provide prevention tips"));
    assert_eq!(reply.language, Language::Hindi);
    assert_eq!(h.translator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translation_failure_passes_english_through() {
    let h = harness_with(AgentConfig::default(), true);
    let ctx = QueryContext::new("टाइफाइड से बचाव", "abc").with_parameter("disease", "typhoid");

    let reply = h.agent.process(ctx, Channel::Webhook).await;

    assert!(reply.text.starts_with("I can provide prevention tips"));
    assert_eq!(reply.language, Language::English);
}

#[tokio::test]
async fn test_health_data_falls_back_when_stats_offline() {
    let h = harness();
    let ctx = QueryContext::new("india numbers", "abc").with_intent("health.data.query");

    let reply = h.agent.process(ctx, Channel::Webhook).await;

    assert_eq!(reply.text, templates::HEALTH_DATA_FALLBACK);
    assert_eq!(reply.source, ResponseSource::Fallback);
    assert!((reply.confidence - 0.6).abs() < 1e-6);
}

#[tokio::test]
async fn test_sms_replies_are_truncated() {
    let config = AgentConfig {
        sms_max_length: 300,
        ..Default::default()
    };
    let h = harness_with(config, false);

    let reply = h
        .agent
        .process(QueryContext::new("hello", "abc"), Channel::Sms)
        .await;
    assert!(reply.text.chars().count() <= 300);
    assert!(reply.text.ends_with(CONTINUATION_NOTICE));

    let reply = h
        .agent
        .process(QueryContext::new("hello", "abc"), Channel::WhatsApp)
        .await;
    assert_eq!(reply.text, templates::DEFAULT_HELP);
}

#[tokio::test]
async fn test_interactions_are_recorded() {
    let h = harness();
    h.agent
        .process(QueryContext::new("dengue symptoms", "user-1"), Channel::Webhook)
        .await;
    h.agent
        .process(QueryContext::new("hello", "user-2"), Channel::Sms)
        .await;

    assert_eq!(h.analytics.interaction_count().await.unwrap(), 2);

    let records = h.analytics.records();
    assert_eq!(records[0].session_key, "user-1");
    assert_eq!(records[0].query, "dengue symptoms");
    assert_eq!(records[1].channel, Channel::Sms);
    assert!(records.iter().all(|r| r.response.chars().count() <= 500));
}
