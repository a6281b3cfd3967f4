//! Telemetry Module
//!
//! Anonymous usage counters for the Terminal:
//! - searches and what they resolved to
//! - LARP scores computed, by risk level (cache hits are not recounted)
//! - request latency
//!
//! No query strings are stored, only their classification.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::types::{EntityType, RiskLevel};
use crate::utils::constants::DEFAULT_TELEMETRY_DIR;

/// Aggregated statistics snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryStats {
    pub total_searches: u64,
    pub unresolved_searches: u64,
    /// Resolutions keyed by entity type (`ticker`, `contract`, ...)
    pub resolutions_by_type: HashMap<String, u64>,
    pub total_scored: u64,
    /// Computed scores keyed by risk level
    pub scores_by_risk: HashMap<String, u64>,
    pub avg_latency_ms: f64,
    pub period_start: u64,
    pub period_end: u64,
}

impl TelemetryStats {
    /// Share of scored subjects rated high or critical, in percent
    pub fn flagged_rate(&self) -> f64 {
        if self.total_scored == 0 {
            return 0.0;
        }
        let flagged: u64 = ["high", "critical"]
            .iter()
            .filter_map(|level| self.scores_by_risk.get(*level))
            .sum();
        flagged as f64 / self.total_scored as f64 * 100.0
    }
}

/// Lock-free telemetry collector
pub struct TelemetryCollector {
    total_searches: AtomicU64,
    unresolved_searches: AtomicU64,
    resolutions: [AtomicU64; 5],
    total_scored: AtomicU64,
    scores_by_risk: [AtomicU64; 4],
    total_requests: AtomicU64,
    total_latency_ms: AtomicU64,
    session_start: u64,
    export_dir: PathBuf,
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self::with_export_dir(PathBuf::from(DEFAULT_TELEMETRY_DIR))
    }

    pub fn with_export_dir(export_dir: PathBuf) -> Self {
        Self {
            total_searches: AtomicU64::new(0),
            unresolved_searches: AtomicU64::new(0),
            resolutions: Default::default(),
            total_scored: AtomicU64::new(0),
            scores_by_risk: Default::default(),
            total_requests: AtomicU64::new(0),
            total_latency_ms: AtomicU64::new(0),
            session_start: current_timestamp(),
            export_dir,
        }
    }

    /// Record a search and its resolution (`None` = unresolved)
    pub fn record_search(&self, resolved: Option<EntityType>) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);
        match resolved {
            Some(kind) => {
                self.resolutions[entity_slot(kind)].fetch_add(1, Ordering::Relaxed);
            }
            None => {
                self.unresolved_searches.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn record_score(&self, level: RiskLevel) {
        self.total_scored.fetch_add(1, Ordering::Relaxed);
        self.scores_by_risk[risk_slot(level)].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_latency(&self, latency_ms: u64) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(latency_ms, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> TelemetryStats {
        let requests = self.total_requests.load(Ordering::Relaxed);
        let latency = self.total_latency_ms.load(Ordering::Relaxed);
        let avg_latency_ms = if requests > 0 {
            latency as f64 / requests as f64
        } else {
            0.0
        };

        let resolutions_by_type = EntityType::ALL
            .iter()
            .map(|kind| {
                (
                    kind.as_str().to_string(),
                    self.resolutions[entity_slot(*kind)].load(Ordering::Relaxed),
                )
            })
            .collect();

        let scores_by_risk = RiskLevel::ALL
            .iter()
            .map(|level| {
                (
                    level.as_str().to_string(),
                    self.scores_by_risk[risk_slot(*level)].load(Ordering::Relaxed),
                )
            })
            .collect();

        TelemetryStats {
            total_searches: self.total_searches.load(Ordering::Relaxed),
            unresolved_searches: self.unresolved_searches.load(Ordering::Relaxed),
            resolutions_by_type,
            total_scored: self.total_scored.load(Ordering::Relaxed),
            scores_by_risk,
            avg_latency_ms,
            period_start: self.session_start,
            period_end: current_timestamp(),
        }
    }

    /// Export current stats to a timestamped JSON file
    pub fn export_stats_json(&self) -> Result<PathBuf, std::io::Error> {
        fs::create_dir_all(&self.export_dir)?;
        let stats = self.get_stats();
        let path = self
            .export_dir
            .join(format!("stats_{}.json", current_timestamp()));

        let json = serde_json::to_string_pretty(&stats)?;
        fs::write(&path, json)?;

        Ok(path)
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn entity_slot(kind: EntityType) -> usize {
    match kind {
        EntityType::Ticker => 0,
        EntityType::Contract => 1,
        EntityType::XHandle => 2,
        EntityType::Domain => 3,
        EntityType::Ens => 4,
    }
}

fn risk_slot(level: RiskLevel) -> usize {
    match level {
        RiskLevel::Low => 0,
        RiskLevel::Medium => 1,
        RiskLevel::High => 2,
        RiskLevel::Critical => 3,
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_counters() {
        let telemetry = TelemetryCollector::new();
        telemetry.record_search(Some(EntityType::Ticker));
        telemetry.record_search(Some(EntityType::Ticker));
        telemetry.record_search(None);

        let stats = telemetry.get_stats();
        assert_eq!(stats.total_searches, 3);
        assert_eq!(stats.unresolved_searches, 1);
        assert_eq!(stats.resolutions_by_type["ticker"], 2);
        assert_eq!(stats.resolutions_by_type["ens"], 0);
    }

    #[test]
    fn test_flagged_rate() {
        let telemetry = TelemetryCollector::new();
        telemetry.record_score(RiskLevel::Low);
        telemetry.record_score(RiskLevel::High);
        telemetry.record_score(RiskLevel::Critical);
        telemetry.record_score(RiskLevel::Medium);

        let stats = telemetry.get_stats();
        assert_eq!(stats.total_scored, 4);
        assert_eq!(stats.flagged_rate(), 50.0);
    }

    #[test]
    fn test_average_latency() {
        let telemetry = TelemetryCollector::new();
        assert_eq!(telemetry.get_stats().avg_latency_ms, 0.0);
        telemetry.record_latency(10);
        telemetry.record_latency(30);
        assert_eq!(telemetry.get_stats().avg_latency_ms, 20.0);
    }

    #[test]
    fn test_export_json() {
        let dir = std::env::temp_dir().join(format!("clarp-telemetry-{}", uuid::Uuid::new_v4()));
        let telemetry = TelemetryCollector::with_export_dir(dir.clone());
        telemetry.record_search(Some(EntityType::XHandle));

        let path = telemetry.export_stats_json().unwrap();
        let written: TelemetryStats =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.total_searches, 1);

        let _ = fs::remove_dir_all(dir);
    }
}
