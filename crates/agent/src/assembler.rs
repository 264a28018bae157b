//! Response assembly
//!
//! Turns a routed query into a [`ResponseEnvelope`]. Every branch produces a
//! reply: lookup misses fall back to the help text, and a failed statistics
//! lookup falls back to a static notice.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use health_agent_core::{
    DiseaseId, Language, MatchResult, QueryContext, ResponseEnvelope, ResponseSource,
    StatsProvider,
};
use health_agent_knowledge::{KnowledgeStore, LexicalMatcher};

use crate::router::Branch;
use crate::templates;

pub const PREVENTION_CONFIDENCE: f32 = 0.9;
pub const PREVENTION_FALLBACK_CONFIDENCE: f32 = 0.5;
pub const VACCINATION_CONFIDENCE: f32 = 0.9;
pub const EMERGENCY_CONFIDENCE: f32 = 0.95;
pub const HEALTH_DATA_CONFIDENCE: f32 = 0.9;
pub const HEALTH_DATA_FALLBACK_CONFIDENCE: f32 = 0.6;

/// Assembler tuning
#[derive(Debug, Clone)]
pub struct AssemblerConfig {
    /// Match scores strictly above this are accepted
    pub match_threshold: f32,
    /// Confidence reported with the help text
    pub default_confidence: f32,
    /// Region for statistics when the query names none
    pub default_region: String,
    pub stats_timeout: Duration,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.3,
            default_confidence: 0.1,
            default_region: "india".to_string(),
            stats_timeout: Duration::from_secs(5),
        }
    }
}

pub struct ResponseAssembler {
    store: Arc<KnowledgeStore>,
    matcher: Arc<LexicalMatcher>,
    stats: Arc<dyn StatsProvider>,
    config: AssemblerConfig,
}

impl ResponseAssembler {
    pub fn new(
        store: Arc<KnowledgeStore>,
        matcher: Arc<LexicalMatcher>,
        stats: Arc<dyn StatsProvider>,
        config: AssemblerConfig,
    ) -> Self {
        Self {
            store,
            matcher,
            stats,
            config,
        }
    }

    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    pub async fn assemble(&self, branch: Branch, ctx: &QueryContext) -> ResponseEnvelope {
        match branch {
            Branch::Symptoms => self.symptoms(ctx),
            Branch::Prevention => self.prevention(ctx),
            Branch::Vaccination => self.vaccination(ctx),
            Branch::Emergency => ResponseEnvelope::new(
                templates::EMERGENCY,
                EMERGENCY_CONFIDENCE,
                Language::Hindi,
                ResponseSource::Emergency,
            ),
            Branch::HealthData => self.health_data(ctx).await,
            Branch::Unclassified => self.matched_symptoms(ctx),
        }
    }

    /// Help text with the configured default confidence
    pub fn default_response(&self) -> ResponseEnvelope {
        ResponseEnvelope::new(
            templates::DEFAULT_HELP,
            self.config.default_confidence,
            Language::English,
            ResponseSource::Default,
        )
    }

    fn symptoms(&self, ctx: &QueryContext) -> ResponseEnvelope {
        match ctx.disease() {
            Some(disease) => self
                .symptom_reply(disease, ctx.detected_language, None)
                .unwrap_or_else(|| self.default_response()),
            None => self.matched_symptoms(ctx),
        }
    }

    fn matched_symptoms(&self, ctx: &QueryContext) -> ResponseEnvelope {
        let result = self.match_query(ctx);
        result
            .accepted(self.config.match_threshold)
            .and_then(|disease| {
                self.symptom_reply(disease, ctx.detected_language, Some(result.confidence))
            })
            .unwrap_or_else(|| self.default_response())
    }

    /// Symptom text in the user's language where available
    ///
    /// `matched` carries the match score; without it the record's base
    /// confidence is reported.
    fn symptom_reply(
        &self,
        disease: DiseaseId,
        language: Language,
        matched: Option<f32>,
    ) -> Option<ResponseEnvelope> {
        let text = self.store.lookup_localized(disease, language)?;
        let text_language = if self.store.lookup(disease, language).is_some() {
            language
        } else {
            Language::English
        };

        let (confidence, source) = match matched {
            Some(score) => (score, ResponseSource::MlMatch),
            None => (
                self.store.base_confidence(disease).unwrap_or(PREVENTION_CONFIDENCE),
                ResponseSource::KnowledgeBase,
            ),
        };

        Some(ResponseEnvelope::new(text, confidence, text_language, source))
    }

    fn prevention(&self, ctx: &QueryContext) -> ResponseEnvelope {
        if let Some(disease) = ctx.disease() {
            return self.prevention_reply(disease, PREVENTION_CONFIDENCE, ResponseSource::KnowledgeBase);
        }

        let result = self.match_query(ctx);
        match result.accepted(self.config.match_threshold) {
            Some(disease) => {
                self.prevention_reply(disease, result.confidence, ResponseSource::MlMatch)
            },
            None => self.default_response(),
        }
    }

    fn prevention_reply(
        &self,
        disease: DiseaseId,
        confidence: f32,
        source: ResponseSource,
    ) -> ResponseEnvelope {
        match self.store.lookup_prevention(disease) {
            Some(text) => ResponseEnvelope::new(text, confidence, Language::English, source),
            None => {
                tracing::debug!(disease = %disease, "No prevention text, listing alternatives");
                ResponseEnvelope::new(
                    templates::prevention_fallback(&self.store.diseases_with_prevention()),
                    PREVENTION_FALLBACK_CONFIDENCE,
                    Language::English,
                    ResponseSource::Fallback,
                )
            },
        }
    }

    fn vaccination(&self, ctx: &QueryContext) -> ResponseEnvelope {
        let location = ctx.location().unwrap_or(&self.config.default_region);
        ResponseEnvelope::new(
            templates::vaccination(location),
            VACCINATION_CONFIDENCE,
            Language::Hindi,
            ResponseSource::KnowledgeBase,
        )
    }

    async fn health_data(&self, ctx: &QueryContext) -> ResponseEnvelope {
        let region = ctx.location().unwrap_or(&self.config.default_region);

        let lookup = tokio::time::timeout(self.config.stats_timeout, self.stats.fetch_stats(region));
        let failure = match lookup.await {
            Ok(Ok(stats)) => {
                return ResponseEnvelope::new(
                    templates::health_data(region, &stats, Utc::now()),
                    HEALTH_DATA_CONFIDENCE,
                    Language::Hindi,
                    ResponseSource::GovernmentApi,
                );
            },
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!(
                "timed out after {}s",
                self.config.stats_timeout.as_secs_f32()
            ),
        };

        tracing::warn!(
            provider = self.stats.name(),
            region = %region,
            error = %failure,
            "Statistics unavailable, using fallback"
        );
        metrics::counter!("health_agent_collaborator_failures_total", "collaborator" => "stats")
            .increment(1);

        ResponseEnvelope::new(
            templates::HEALTH_DATA_FALLBACK,
            HEALTH_DATA_FALLBACK_CONFIDENCE,
            Language::Hindi,
            ResponseSource::Fallback,
        )
    }

    fn match_query(&self, ctx: &QueryContext) -> MatchResult {
        self.matcher.find_best_match(&ctx.raw_text)
    }
}
