//! Narrative Manipulation Risk
//!
//! Bot-like engagement, coordinated posting bursts, shill clusters and
//! purchased-follower growth on the project's X presence.

use super::ScoreAccumulator;
use crate::models::types::{EvidenceType, ModuleScore, Severity, XBehaviorSignals};
use crate::utils::constants::*;

pub fn calculate_x_behavior_score(signals: &XBehaviorSignals) -> ModuleScore {
    let mut acc = ScoreAccumulator::new("x_behavior");

    if let Some(rate) = signals.engagement_rate {
        if rate > ENGAGEMENT_CRITICAL_PCT {
            acc.flag(
                EvidenceType::Engagement,
                Severity::Critical,
                ENGAGEMENT_CRITICAL_POINTS,
                format!("Engagement rate of {:.0}% is far above organic levels", rate),
                "Bot Engagement",
            );
        } else if rate > ENGAGEMENT_WARNING_PCT {
            acc.flag(
                EvidenceType::Engagement,
                Severity::Warning,
                ENGAGEMENT_WARNING_POINTS,
                format!("Elevated engagement rate ({:.0}%)", rate),
                "Inflated Engagement",
            );
        }
    }

    if signals.burst_pattern == Some(true) {
        acc.flag(
            EvidenceType::BurstPattern,
            Severity::Warning,
            BURST_PATTERN_POINTS,
            "Coordinated posting bursts detected".to_string(),
            "Burst Posting",
        );
    }

    match signals.shill_cluster_size {
        Some(size) if size >= SHILL_CLUSTER_CRITICAL_SIZE => {
            acc.flag(
                EvidenceType::ShillCluster,
                Severity::Critical,
                SHILL_CLUSTER_CRITICAL_POINTS,
                format!("Shill cluster of {} accounts amplifying the project", size),
                "Shill Cluster",
            );
        }
        Some(size) if size >= SHILL_CLUSTER_WARNING_SIZE => {
            acc.flag(
                EvidenceType::ShillCluster,
                Severity::Warning,
                SHILL_CLUSTER_WARNING_POINTS,
                format!("{} accounts posting near-identical promotion", size),
                "Shill Cluster",
            );
        }
        Some(size) if size > 0 => {
            acc.flag(
                EvidenceType::ShillCluster,
                Severity::Info,
                SHILL_CLUSTER_MINOR_POINTS,
                format!("Small group of {} promoting accounts", size),
                "Paid Promotion",
            );
        }
        _ => {}
    }

    if let Some(growth) = signals.follower_growth_rate {
        if growth > FOLLOWER_GROWTH_WARNING_PCT {
            acc.flag(
                EvidenceType::FollowerGrowth,
                Severity::Warning,
                FOLLOWER_GROWTH_WARNING_POINTS,
                format!("Followers grew {:.0}%, consistent with purchased followers", growth),
                "Follower Spike",
            );
        } else if growth > FOLLOWER_GROWTH_INFO_PCT {
            acc.flag(
                EvidenceType::FollowerGrowth,
                Severity::Info,
                FOLLOWER_GROWTH_INFO_POINTS,
                format!("Rapid follower growth ({:.0}%)", growth),
                "Fast Growth",
            );
        }
    }

    acc.finish(X_BEHAVIOR_MODULE_NAME, X_BEHAVIOR_WEIGHT)
}
