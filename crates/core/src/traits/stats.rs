//! Disease statistics trait

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Country-level disease statistics
///
/// Field names follow the public statistics API (camelCase on the wire).
/// Missing fields deserialize to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiseaseStats {
    pub cases: u64,
    pub today_cases: u64,
    pub deaths: u64,
    pub today_deaths: u64,
    pub recovered: u64,
    pub active: u64,
    pub critical: u64,
    pub tests: u64,
    pub population: u64,
    pub cases_per_one_million: f64,
    pub tests_per_one_million: f64,
}

impl DiseaseStats {
    /// Deaths as a percentage of cases
    pub fn death_rate(&self) -> f64 {
        percentage(self.deaths, self.cases)
    }

    /// Recoveries as a percentage of cases
    pub fn recovery_rate(&self) -> f64 {
        percentage(self.recovered, self.cases)
    }

    /// Active cases as a percentage of cases
    pub fn active_rate(&self) -> f64 {
        percentage(self.active, self.cases)
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Statistics lookup interface
///
/// Implementations:
/// - `DiseaseShClient` - disease.sh compatible REST API
#[async_trait]
pub trait StatsProvider: Send + Sync + 'static {
    /// Fetch current statistics for a region (country name or code)
    async fn fetch_stats(&self, region: &str) -> Result<DiseaseStats>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let stats = DiseaseStats {
            cases: 1000,
            deaths: 10,
            recovered: 900,
            active: 90,
            ..Default::default()
        };
        assert!((stats.death_rate() - 1.0).abs() < 1e-9);
        assert!((stats.recovery_rate() - 90.0).abs() < 1e-9);
        assert!((stats.active_rate() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_cases() {
        assert_eq!(DiseaseStats::default().death_rate(), 0.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let stats: DiseaseStats =
            serde_json::from_str(r#"{"cases": 45000000, "todayCases": 120, "extra": "x"}"#)
                .unwrap();
        assert_eq!(stats.cases, 45_000_000);
        assert_eq!(stats.today_cases, 120);
        assert_eq!(stats.deaths, 0);
    }
}
