//! Background outbreak monitor
//!
//! Polls the statistics provider on a fixed interval and logs a bilingual
//! alert whenever the daily case count exceeds the threshold. Failed polls
//! are retried on a shorter interval. The loop ends when the shutdown
//! channel flips to `true` or its sender is dropped.

use std::sync::Arc;
use std::time::Duration;

use health_agent_config::MonitorConfig;
use health_agent_core::{AlertLog, AlertSeverity, HealthAlert, Result, StatsProvider};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::templates;

pub struct OutbreakMonitor {
    stats: Arc<dyn StatsProvider>,
    alerts: Arc<dyn AlertLog>,
    interval: Duration,
    retry: Duration,
    threshold: u64,
    region: String,
}

impl OutbreakMonitor {
    pub fn new(
        stats: Arc<dyn StatsProvider>,
        alerts: Arc<dyn AlertLog>,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            stats,
            alerts,
            interval: Duration::from_secs(config.interval_seconds),
            retry: Duration::from_secs(config.retry_seconds),
            threshold: config.alert_threshold,
            region: config.region.clone(),
        }
    }

    /// One poll; returns the alert if one was raised
    pub async fn check_once(&self) -> Result<Option<HealthAlert>> {
        let stats = self.stats.fetch_stats(&self.region).await?;

        if stats.today_cases <= self.threshold {
            tracing::debug!(
                region = %self.region,
                today_cases = stats.today_cases,
                threshold = self.threshold,
                "Daily cases below alert threshold"
            );
            return Ok(None);
        }

        let alert = HealthAlert::outbreak(
            templates::outbreak_alert(stats.today_cases),
            AlertSeverity::High,
            &self.region,
        );
        self.alerts.append(alert.clone()).await?;

        tracing::warn!(
            region = %self.region,
            today_cases = stats.today_cases,
            threshold = self.threshold,
            "Outbreak alert raised"
        );
        metrics::counter!("health_agent_outbreak_alerts_total").increment(1);

        Ok(Some(alert))
    }

    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            region = %self.region,
            interval_secs = self.interval.as_secs(),
            threshold = self.threshold,
            "Outbreak monitor started"
        );

        while !*shutdown.borrow() {
            let delay = match self.check_once().await {
                Ok(_) => self.interval,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        retry_secs = self.retry.as_secs(),
                        "Outbreak check failed"
                    );
                    metrics::counter!(
                        "health_agent_collaborator_failures_total",
                        "collaborator" => "monitor"
                    )
                    .increment(1);
                    self.retry
                },
            };

            tokio::select! {
                _ = tokio::time::sleep(delay) => {},
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                },
            }
        }

        tracing::info!("Outbreak monitor stopped");
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use health_agent_core::{DiseaseStats, Error};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    /// Fails the first `failures` calls, then reports `today_cases`
    struct FlakyStats {
        calls: AtomicUsize,
        failures: usize,
        today_cases: u64,
    }

    #[async_trait]
    impl StatsProvider for FlakyStats {
        async fn fetch_stats(&self, _region: &str) -> Result<DiseaseStats> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(Error::Stats("unreachable".into()));
            }
            Ok(DiseaseStats {
                today_cases: self.today_cases,
                ..Default::default()
            })
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    #[derive(Default)]
    struct VecLog(Mutex<Vec<HealthAlert>>);

    #[async_trait]
    impl AlertLog for VecLog {
        async fn append(&self, alert: HealthAlert) -> Result<()> {
            self.0.lock().await.push(alert);
            Ok(())
        }

        async fn recent(&self, limit: usize) -> Result<Vec<HealthAlert>> {
            Ok(self.0.lock().await.iter().rev().take(limit).cloned().collect())
        }
    }

    fn monitor(failures: usize, today_cases: u64) -> (OutbreakMonitor, Arc<FlakyStats>, Arc<VecLog>) {
        let stats = Arc::new(FlakyStats {
            calls: AtomicUsize::new(0),
            failures,
            today_cases,
        });
        let log = Arc::new(VecLog::default());
        let monitor = OutbreakMonitor::new(stats.clone(), log.clone(), &MonitorConfig::default());
        (monitor, stats, log)
    }

    #[tokio::test]
    async fn test_alert_only_above_threshold() {
        let (m, _, log) = monitor(0, 50_000);
        assert!(m.check_once().await.unwrap().is_none());

        let (m, _, log2) = monitor(0, 61_000);
        let alert = m.check_once().await.unwrap().unwrap();
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.location, "india");
        assert!(alert.message.contains("61,000"));

        assert!(log.0.lock().await.is_empty());
        assert_eq!(log2.0.lock().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_after_failure() {
        let (m, stats, log) = monitor(1, 70_000);
        let (tx, rx) = watch::channel(false);
        let handle = m.spawn(rx);

        // First poll fails, the retry fires after one hour
        tokio::time::sleep(Duration::from_secs(3_601)).await;
        assert_eq!(stats.calls.load(Ordering::SeqCst), 2);
        assert_eq!(log.recent(10).await.unwrap().len(), 1);

        tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_stops_on_shutdown() {
        let (m, stats, _) = monitor(0, 0);
        let (tx, rx) = watch::channel(false);
        let handle = m.spawn(rx);

        tokio::task::yield_now().await;
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("monitor did not stop")
            .unwrap();
        assert!(stats.calls.load(Ordering::SeqCst) <= 1);
    }
}
