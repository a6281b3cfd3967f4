//! Wallet Behavior Risk

use super::ScoreAccumulator;
use crate::models::types::{EvidenceType, ModuleScore, Severity, WalletSignals};
use crate::utils::constants::*;

/// Deployer-wallet history. Connections to known rug wallets and CEX
/// cash-out routes are checked before wallet age.
pub fn calculate_wallet_score(signals: &WalletSignals) -> ModuleScore {
    let mut acc = ScoreAccumulator::new("wallet");

    if signals.known_rug_wallet_connection == Some(true) {
        acc.flag(
            EvidenceType::RugConnection,
            Severity::Critical,
            RUG_CONNECTION_POINTS,
            "Deployer has funding links to known rug-pull wallets".to_string(),
            "Rug Wallet Link",
        );
    }

    if signals.cex_deposits_detected == Some(true) {
        acc.flag(
            EvidenceType::CexDeposits,
            Severity::Critical,
            CEX_DEPOSITS_POINTS,
            "Deployer funds are being routed to exchange deposit addresses".to_string(),
            "CEX Cashout",
        );
    }

    if let Some(age) = signals.deployer_age {
        if age < DEPLOYER_AGE_CRITICAL_DAYS {
            acc.flag(
                EvidenceType::DeployerAge,
                Severity::Critical,
                DEPLOYER_AGE_CRITICAL_POINTS,
                format!("Deployer wallet was created {} days ago", age),
                "Fresh Deployer",
            );
        } else if age < DEPLOYER_AGE_WARNING_DAYS {
            acc.flag(
                EvidenceType::DeployerAge,
                Severity::Warning,
                DEPLOYER_AGE_WARNING_POINTS,
                format!("Deployer wallet is less than a month old ({} days)", age),
                "Fresh Deployer",
            );
        } else if age < DEPLOYER_AGE_YOUNG_DAYS {
            acc.flag(
                EvidenceType::DeployerAge,
                Severity::Info,
                DEPLOYER_AGE_YOUNG_POINTS,
                format!("Deployer wallet is {} days old", age),
                "Young Deployer",
            );
        }
    }

    acc.finish(WALLET_MODULE_NAME, WALLET_WEIGHT)
}
