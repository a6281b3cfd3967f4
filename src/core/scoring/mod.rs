//! Scoring modules
//!
//! Four independent point tables. Each maps an optional signal set to a
//! 0-100 sub-score plus the evidence that produced it. Absent signals add
//! nothing, so an empty signal set scores 0 with no evidence.

pub mod identity;
pub mod liquidity;
pub mod wallet;
pub mod x_behavior;

pub use identity::calculate_identity_score;
pub use liquidity::calculate_liquidity_score;
pub use wallet::calculate_wallet_score;
pub use x_behavior::calculate_x_behavior_score;

use chrono::{DateTime, Utc};

use crate::models::types::{Evidence, EvidenceType, ModuleScore, Severity};

/// Running total and evidence list for one module.
/// The total may dip below zero from credits; it is clamped on `finish`.
pub(crate) struct ScoreAccumulator {
    module_key: &'static str,
    total: i32,
    evidence: Vec<Evidence>,
    now: DateTime<Utc>,
}

impl ScoreAccumulator {
    pub(crate) fn new(module_key: &'static str) -> Self {
        Self {
            module_key,
            total: 0,
            evidence: Vec::new(),
            now: Utc::now(),
        }
    }

    /// Apply `points` and record a finding
    pub(crate) fn flag(
        &mut self,
        kind: EvidenceType,
        severity: Severity,
        points: i32,
        summary: String,
        tag: &str,
    ) -> &mut Evidence {
        self.total += points;
        self.evidence.push(Evidence {
            id: format!("{}-{}", self.module_key, kind.as_str()),
            kind,
            severity,
            summary,
            tag: tag.to_string(),
            impact: points.clamp(0, 100) as u8,
            timestamp: self.now,
            url: None,
        });
        let last = self.evidence.len() - 1;
        &mut self.evidence[last]
    }

    pub(crate) fn finish(self, name: &str, weight: f64) -> ModuleScore {
        ModuleScore {
            name: name.to_string(),
            weight,
            score: self.total.clamp(0, 100) as u8,
            evidence: self.evidence,
        }
    }
}
