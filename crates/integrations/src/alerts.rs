//! Process-local outbreak alert log

use async_trait::async_trait;
use health_agent_core::{AlertLog, HealthAlert, Result};
use parking_lot::RwLock;

/// Append-only alert log
#[derive(Debug, Default)]
pub struct InMemoryAlertLog {
    alerts: RwLock<Vec<HealthAlert>>,
}

impl InMemoryAlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.alerts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.read().is_empty()
    }
}

#[async_trait]
impl AlertLog for InMemoryAlertLog {
    async fn append(&self, alert: HealthAlert) -> Result<()> {
        tracing::info!(
            severity = ?alert.severity,
            location = %alert.location,
            "Health alert logged"
        );
        self.alerts.write().push(alert);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<HealthAlert>> {
        Ok(self
            .alerts
            .read()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_agent_core::AlertSeverity;

    #[tokio::test]
    async fn test_recent_is_newest_first() {
        let log = InMemoryAlertLog::new();
        log.append(HealthAlert::outbreak("first", AlertSeverity::High, "india"))
            .await
            .unwrap();
        log.append(HealthAlert::outbreak("second", AlertSeverity::High, "india"))
            .await
            .unwrap();

        let recent = log.recent(1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "second");
        assert_eq!(recent[0].alert_type, "disease_outbreak");
        assert_eq!(log.len(), 2);
    }
}
