//! Type definitions for CLARP Terminal
//! All core data structures for entity resolution and LARP scoring

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Entities
// ============================================

/// Kind of identifier a search string resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Ticker,
    Contract,
    XHandle,
    Domain,
    Ens,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Ticker => "ticker",
            EntityType::Contract => "contract",
            EntityType::XHandle => "x_handle",
            EntityType::Domain => "domain",
            EntityType::Ens => "ens",
        }
    }

    pub const ALL: [EntityType; 5] = [
        EntityType::Ticker,
        EntityType::Contract,
        EntityType::XHandle,
        EntityType::Domain,
        EntityType::Ens,
    ];
}

/// Chain an address or name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
        }
    }
}

/// A typed, normalized identifier extracted from free-text search input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityType,
    /// Input as given (trimmed)
    pub value: String,
    /// Canonical lookup key
    pub normalized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
}

// ============================================
// Signals
// ============================================

/// Team & identity signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentitySignals {
    /// Age of the project's X account in days
    pub x_account_age: Option<u32>,
    /// Age of the project's website domain in days
    pub domain_age: Option<u32>,
    pub has_verified_links: Option<bool>,
    pub has_website: Option<bool>,
    /// Handle used to link account-age evidence; not a scored signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_handle: Option<String>,
    /// Website used to link domain-age evidence; not a scored signal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl IdentitySignals {
    pub fn populated(&self) -> usize {
        [
            self.x_account_age.is_some(),
            self.domain_age.is_some(),
            self.has_verified_links.is_some(),
            self.has_website.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Narrative manipulation signals from X activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XBehaviorSignals {
    /// Engagement rate in percent
    pub engagement_rate: Option<f64>,
    pub burst_pattern: Option<bool>,
    /// Number of accounts in the detected shill cluster
    pub shill_cluster_size: Option<u32>,
    /// Follower growth rate in percent
    pub follower_growth_rate: Option<f64>,
}

impl XBehaviorSignals {
    pub fn populated(&self) -> usize {
        [
            self.engagement_rate.is_some(),
            self.burst_pattern.is_some(),
            self.shill_cluster_size.is_some(),
            self.follower_growth_rate.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Deployer wallet signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletSignals {
    /// Age of the deployer wallet in days
    pub deployer_age: Option<u32>,
    pub cex_deposits_detected: Option<bool>,
    pub known_rug_wallet_connection: Option<bool>,
}

impl WalletSignals {
    pub fn populated(&self) -> usize {
        [
            self.deployer_age.is_some(),
            self.cex_deposits_detected.is_some(),
            self.known_rug_wallet_connection.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Token & liquidity signals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquiditySignals {
    pub lp_locked: Option<bool>,
    /// Remaining LP lock in days
    pub lp_lock_duration: Option<u32>,
    /// Share of supply held by the top holders, in percent
    pub holder_concentration: Option<f64>,
}

impl LiquiditySignals {
    pub fn populated(&self) -> usize {
        [
            self.lp_locked.is_some(),
            self.lp_lock_duration.is_some(),
            self.holder_concentration.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

/// Full signal bundle for one project or profile.
/// Missing module keys deserialize to empty signal sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreSignals {
    pub identity: IdentitySignals,
    pub x_behavior: XBehaviorSignals,
    pub wallet: WalletSignals,
    pub liquidity: LiquiditySignals,
}

impl ScoreSignals {
    /// Number of scored signal fields actually supplied
    pub fn populated(&self) -> usize {
        self.identity.populated()
            + self.x_behavior.populated()
            + self.wallet.populated()
            + self.liquidity.populated()
    }
}

// ============================================
// Evidence & scores
// ============================================

/// Evidence severity, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Signal category an evidence entry was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceType {
    AccountAge,
    DomainAge,
    VerifiedLinks,
    Website,
    Engagement,
    BurstPattern,
    ShillCluster,
    FollowerGrowth,
    DeployerAge,
    CexDeposits,
    RugConnection,
    LpLock,
    HolderConcentration,
}

impl EvidenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvidenceType::AccountAge => "account_age",
            EvidenceType::DomainAge => "domain_age",
            EvidenceType::VerifiedLinks => "verified_links",
            EvidenceType::Website => "website",
            EvidenceType::Engagement => "engagement",
            EvidenceType::BurstPattern => "burst_pattern",
            EvidenceType::ShillCluster => "shill_cluster",
            EvidenceType::FollowerGrowth => "follower_growth",
            EvidenceType::DeployerAge => "deployer_age",
            EvidenceType::CexDeposits => "cex_deposits",
            EvidenceType::RugConnection => "rug_connection",
            EvidenceType::LpLock => "lp_lock",
            EvidenceType::HolderConcentration => "holder_concentration",
        }
    }
}

/// A structured, severity-tagged explanation attached to a module score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EvidenceType,
    pub severity: Severity,
    pub summary: String,
    /// Short label surfaced in `LarpScore::top_tags`
    pub tag: String,
    /// Points this finding contributed to its module score
    pub impact: u8,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Output of a single scoring module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleScore {
    pub name: String,
    pub weight: f64,
    /// 0-100
    pub score: u8,
    pub evidence: Vec<Evidence>,
}

/// Per-module breakdown of a LARP score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub identity: ModuleScore,
    pub x_behavior: ModuleScore,
    pub wallet: ModuleScore,
    pub liquidity: ModuleScore,
}

impl ScoreBreakdown {
    /// Modules in display order
    pub fn modules(&self) -> [&ModuleScore; 4] {
        [&self.identity, &self.x_behavior, &self.wallet, &self.liquidity]
    }
}

/// Risk classification of a combined score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Low => "✅",
            RiskLevel::Medium => "🟡",
            RiskLevel::High => "🔴",
            RiskLevel::Critical => "💀",
        }
    }

    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];
}

/// How much of the signal surface backed a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Combined 0-100 LARP score for a project or profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LarpScore {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub confidence: Confidence,
    pub top_tags: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub last_updated: DateTime<Utc>,
}

impl LarpScore {
    /// Pretty print the score report
    pub fn summary(&self) -> String {
        let mut output = format!(
            "\n{} LARP score: {} | risk: {} | confidence: {}\n",
            self.risk_level.emoji(),
            self.score,
            self.risk_level.as_str(),
            self.confidence.as_str()
        );

        for module in self.breakdown.modules() {
            output.push_str(&format!(
                "   {:<28} {:>3} (weight {:.2})\n",
                module.name, module.score, module.weight
            ));
            for evidence in &module.evidence {
                output.push_str(&format!(
                    "     - [{}] {}\n",
                    evidence.severity.as_str(),
                    evidence.summary
                ));
            }
        }

        if !self.top_tags.is_empty() {
            output.push_str(&format!("   Tags: {}\n", self.top_tags.join(", ")));
        }

        output
    }
}
