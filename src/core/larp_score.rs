//! LARP Score combiner
//!
//! Runs all four modules over a signal bundle and folds them into a single
//! 0-100 score with a risk level, a confidence level and summary tags.
//!
//! - 0-29: low
//! - 30-49: medium
//! - 50-69: high
//! - 70-100: critical

use chrono::Utc;
use std::cmp::Ordering;

use super::scoring::{
    calculate_identity_score, calculate_liquidity_score, calculate_wallet_score,
    calculate_x_behavior_score,
};
use crate::models::types::{Confidence, LarpScore, RiskLevel, ScoreBreakdown, ScoreSignals};
use crate::utils::constants::{
    CONFIDENCE_HIGH_MIN_SIGNALS, CONFIDENCE_MEDIUM_MIN_SIGNALS, MAX_TOP_TAGS, RISK_CRITICAL_MIN,
    RISK_HIGH_MIN, RISK_MEDIUM_MIN,
};

/// Score a full signal bundle
pub fn calculate_larp_score(signals: &ScoreSignals) -> LarpScore {
    let breakdown = ScoreBreakdown {
        identity: calculate_identity_score(&signals.identity),
        x_behavior: calculate_x_behavior_score(&signals.x_behavior),
        wallet: calculate_wallet_score(&signals.wallet),
        liquidity: calculate_liquidity_score(&signals.liquidity),
    };

    let weighted: f64 = breakdown
        .modules()
        .iter()
        .map(|module| module.score as f64 * module.weight)
        .sum();
    let score = weighted.round().clamp(0.0, 100.0) as u8;

    LarpScore {
        score,
        risk_level: get_risk_level(score),
        confidence: get_confidence(signals.populated()),
        top_tags: collect_top_tags(&breakdown),
        breakdown,
        last_updated: Utc::now(),
    }
}

/// Risk band for a combined score
pub fn get_risk_level(score: u8) -> RiskLevel {
    if score >= RISK_CRITICAL_MIN {
        RiskLevel::Critical
    } else if score >= RISK_HIGH_MIN {
        RiskLevel::High
    } else if score >= RISK_MEDIUM_MIN {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Confidence from the number of populated signal fields (out of 15)
pub fn get_confidence(populated_signals: usize) -> Confidence {
    if populated_signals >= CONFIDENCE_HIGH_MIN_SIGNALS {
        Confidence::High
    } else if populated_signals >= CONFIDENCE_MEDIUM_MIN_SIGNALS {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Distinct evidence tags ranked by weighted impact, then severity.
/// Zero-impact findings only count when nothing else was flagged.
/// Ties keep module order.
fn collect_top_tags(breakdown: &ScoreBreakdown) -> Vec<String> {
    let modules = breakdown.modules();
    let weighted = |positive_only: bool| -> Vec<_> {
        modules
            .iter()
            .flat_map(|module| {
                module
                    .evidence
                    .iter()
                    .filter(move |evidence| !positive_only || evidence.impact > 0)
                    .map(move |evidence| {
                        (
                            evidence.impact as f64 * module.weight,
                            evidence.severity,
                            evidence.tag.as_str(),
                        )
                    })
            })
            .collect()
    };

    let mut ranked = weighted(true);
    if ranked.is_empty() {
        ranked = weighted(false);
    }

    ranked.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.1.cmp(&a.1))
    });

    let mut tags: Vec<String> = Vec::with_capacity(MAX_TOP_TAGS);
    for (_, _, tag) in ranked {
        if tags.len() == MAX_TOP_TAGS {
            break;
        }
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
