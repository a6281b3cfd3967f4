//! Token & Liquidity Risk
//!
//! An explicitly unlocked LP outranks any lock-duration reading; a duration
//! is only considered when the pool is locked or its status is unknown.

use super::ScoreAccumulator;
use crate::models::types::{EvidenceType, LiquiditySignals, ModuleScore, Severity};
use crate::utils::constants::*;

pub fn calculate_liquidity_score(signals: &LiquiditySignals) -> ModuleScore {
    let mut acc = ScoreAccumulator::new("liquidity");

    if signals.lp_locked == Some(false) {
        acc.flag(
            EvidenceType::LpLock,
            Severity::Critical,
            LP_UNLOCKED_POINTS,
            "Liquidity pool tokens are not locked".to_string(),
            "Unlocked LP",
        );
    } else if let Some(days) = signals.lp_lock_duration {
        if days < LP_LOCK_SHORT_DAYS {
            acc.flag(
                EvidenceType::LpLock,
                Severity::Warning,
                LP_LOCK_SHORT_POINTS,
                format!("LP lock expires in {} days", days),
                "Short LP Lock",
            );
        } else if days < LP_LOCK_MEDIUM_DAYS {
            acc.flag(
                EvidenceType::LpLock,
                Severity::Info,
                LP_LOCK_MEDIUM_POINTS,
                format!("LP locked for {} days", days),
                "LP Lock Under 6mo",
            );
        } else if days >= LP_LOCK_LONG_DAYS {
            acc.flag(
                EvidenceType::LpLock,
                Severity::Info,
                LP_LOCK_LONG_CREDIT,
                format!("LP locked for {} days", days),
                "Long LP Lock",
            );
        }
    }

    if let Some(pct) = signals.holder_concentration {
        if pct >= HOLDER_CONCENTRATION_CRITICAL_PCT {
            acc.flag(
                EvidenceType::HolderConcentration,
                Severity::Critical,
                HOLDER_CONCENTRATION_CRITICAL_POINTS,
                format!("Top holders control {:.0}% of supply", pct),
                "Whale Concentration",
            );
        } else if pct >= HOLDER_CONCENTRATION_WARNING_PCT {
            acc.flag(
                EvidenceType::HolderConcentration,
                Severity::Warning,
                HOLDER_CONCENTRATION_WARNING_POINTS,
                format!("Top holders control {:.0}% of supply", pct),
                "Concentrated Supply",
            );
        } else if pct >= HOLDER_CONCENTRATION_INFO_PCT {
            acc.flag(
                EvidenceType::HolderConcentration,
                Severity::Info,
                HOLDER_CONCENTRATION_INFO_POINTS,
                format!("Top holders control {:.0}% of supply", pct),
                "Concentrated Supply",
            );
        }
    }

    acc.finish(LIQUIDITY_MODULE_NAME, LIQUIDITY_WEIGHT)
}
