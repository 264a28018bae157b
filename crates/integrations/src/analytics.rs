//! Process-local interaction log

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use health_agent_core::{
    AccuracySummary, AnalyticsSink, InteractionRecord, InteractionSummary, Language,
    QueryFrequency, ResponseSource, Result,
};
use parking_lot::RwLock;

/// Confidence above which a reply counts as high confidence
pub const HIGH_CONFIDENCE: f32 = 0.8;
/// Confidence above which a reply counts as medium confidence
pub const MEDIUM_CONFIDENCE: f32 = 0.6;

/// In-memory analytics store
///
/// Records are appended in arrival order; the newest record of a session is
/// the last one with that session key.
#[derive(Debug, Default)]
pub struct InMemoryAnalyticsStore {
    records: RwLock<Vec<InteractionRecord>>,
    capacity: Option<usize>,
}

impl InMemoryAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` records, dropping the oldest
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            capacity: Some(capacity.max(1)),
        }
    }

    /// Snapshot of all records, oldest first
    pub fn records(&self) -> Vec<InteractionRecord> {
        self.records.read().clone()
    }

    fn recent(&self, since: DateTime<Utc>) -> Vec<InteractionRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| r.timestamp > since)
            .cloned()
            .collect()
    }
}

fn average(values: &[f32]) -> f32 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f32>() / values.len() as f32
    }
}

fn percentage_above(values: &[f32], threshold: f32) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let above = values.iter().filter(|&&c| c > threshold).count();
    above as f32 * 100.0 / values.len() as f32
}

#[async_trait]
impl AnalyticsSink for InMemoryAnalyticsStore {
    async fn record(&self, record: InteractionRecord) -> Result<()> {
        let mut records = self.records.write();
        records.push(record);
        if let Some(capacity) = self.capacity {
            if records.len() > capacity {
                let excess = records.len() - capacity;
                records.drain(..excess);
            }
        }
        Ok(())
    }

    async fn record_feedback(&self, session_key: &str, rating: u8) -> Result<bool> {
        let mut records = self.records.write();
        let newest = records
            .iter_mut()
            .filter(|r| r.session_key == session_key)
            .max_by_key(|r| r.timestamp);

        match newest {
            Some(record) => {
                record.feedback = Some(rating);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn interaction_count(&self) -> Result<usize> {
        Ok(self.records.read().len())
    }

    async fn interaction_summary(&self, since: DateTime<Utc>) -> Result<Vec<InteractionSummary>> {
        let mut groups: BTreeMap<(Language, ResponseSource), (Vec<f32>, HashSet<String>)> =
            BTreeMap::new();

        for record in self.recent(since) {
            let entry = groups.entry((record.language, record.source)).or_default();
            entry.0.push(record.confidence);
            entry.1.insert(record.session_key);
        }

        Ok(groups
            .into_iter()
            .map(|((language, source), (confidences, users))| InteractionSummary {
                language,
                source,
                total_interactions: confidences.len(),
                avg_confidence: average(&confidences),
                unique_users: users.len(),
            })
            .collect())
    }

    async fn top_queries(&self, since: DateTime<Utc>, limit: usize) -> Result<Vec<QueryFrequency>> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in self.recent(since) {
            *counts.entry(record.query).or_insert(0) += 1;
        }

        let mut ranked: Vec<QueryFrequency> = counts
            .into_iter()
            .map(|(query, frequency)| QueryFrequency { query, frequency })
            .collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.query.cmp(&b.query)));
        ranked.truncate(limit);

        Ok(ranked)
    }

    async fn accuracy_summary(&self, since: DateTime<Utc>) -> Result<Vec<AccuracySummary>> {
        let mut groups: BTreeMap<(ResponseSource, Language), Vec<f32>> = BTreeMap::new();
        for record in self.recent(since) {
            groups
                .entry((record.source, record.language))
                .or_default()
                .push(record.confidence);
        }

        Ok(groups
            .into_iter()
            .map(|((source, language), confidences)| AccuracySummary {
                source,
                language,
                avg_confidence: average(&confidences),
                high_confidence_percentage: percentage_above(&confidences, HIGH_CONFIDENCE),
                medium_confidence_percentage: percentage_above(&confidences, MEDIUM_CONFIDENCE),
            })
            .collect())
    }
}
