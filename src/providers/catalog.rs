//! Project & profile catalog
//!
//! The lookup collaborator behind search: given a resolved entity, find the
//! project or X profile it names. `InMemoryCatalog::seeded()` carries the
//! demo dataset the Terminal ships with.

use serde::{Deserialize, Serialize};

use crate::core::entity::extract_handle;
use crate::models::types::{
    Chain, Entity, EntityType, IdentitySignals, LiquiditySignals, ScoreSignals, WalletSignals,
    XBehaviorSignals,
};

/// A tracked crypto project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub chain: Chain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ens: Option<String>,
    pub description: String,
    pub signals: ScoreSignals,
}

/// A tracked X account (KOL, founder, promoter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub handle: String,
    pub display_name: String,
    pub followers: u64,
    pub signals: ScoreSignals,
}

/// Lookup of projects and profiles by resolved entity
pub trait ProjectCatalog: Send + Sync {
    fn list_projects(&self) -> Vec<Project>;

    fn get_project(&self, id: &str) -> Option<Project>;

    fn find_project(&self, entity: &Entity) -> Option<Project>;

    fn find_profile(&self, entity: &Entity) -> Option<Profile>;
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    projects: Vec<Project>,
    profiles: Vec<Profile>,
}

impl InMemoryCatalog {
    pub fn new(projects: Vec<Project>, profiles: Vec<Profile>) -> Self {
        Self { projects, profiles }
    }

    /// Demo dataset
    pub fn seeded() -> Self {
        Self::new(seed_projects(), seed_profiles())
    }
}

impl ProjectCatalog for InMemoryCatalog {
    fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn get_project(&self, id: &str) -> Option<Project> {
        self.projects
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .cloned()
    }

    fn find_project(&self, entity: &Entity) -> Option<Project> {
        self.projects
            .iter()
            .find(|p| project_matches(p, entity))
            .cloned()
    }

    fn find_profile(&self, entity: &Entity) -> Option<Profile> {
        if entity.kind != EntityType::XHandle {
            return None;
        }
        self.profiles
            .iter()
            .find(|p| p.handle.eq_ignore_ascii_case(&entity.normalized))
            .cloned()
    }
}

fn project_matches(project: &Project, entity: &Entity) -> bool {
    let key = entity.normalized.as_str();
    match entity.kind {
        EntityType::Ticker => project.ticker.eq_ignore_ascii_case(key),
        EntityType::Contract => project.contract.as_deref().is_some_and(|contract| {
            match entity.chain {
                Some(Chain::Ethereum) => contract.eq_ignore_ascii_case(key),
                _ => contract == key,
            }
        }),
        EntityType::XHandle => project
            .x_handle
            .as_deref()
            .and_then(extract_handle)
            .is_some_and(|handle| handle == key),
        EntityType::Domain => project
            .website
            .as_deref()
            .is_some_and(|site| website_host(site) == strip_www(key)),
        EntityType::Ens => project
            .ens
            .as_deref()
            .is_some_and(|ens| ens.eq_ignore_ascii_case(key)),
    }
}

/// Lower-cased host of a website string, without scheme, `www.` or path
fn website_host(website: &str) -> String {
    let lower = website.trim().to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    strip_www(host).to_string()
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

// ============================================
// Seed data
// ============================================

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "clarp".to_string(),
            name: "CLARP".to_string(),
            ticker: "CLARP".to_string(),
            chain: Chain::Solana,
            contract: Some("CLRPqX7vTn3bK9mWz4hYf2sDgA8eJcLuN5rVpE6tMxHk".to_string()),
            x_handle: Some("@clarpterminal".to_string()),
            website: Some("https://clarp.lol".to_string()),
            ens: None,
            description: "Trust-score terminal for crypto projects".to_string(),
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(420),
                    domain_age: Some(400),
                    has_verified_links: Some(true),
                    has_website: Some(true),
                    x_handle: Some("clarpterminal".to_string()),
                    website: Some("clarp.lol".to_string()),
                },
                x_behavior: XBehaviorSignals {
                    engagement_rate: Some(4.5),
                    burst_pattern: Some(false),
                    shill_cluster_size: Some(0),
                    follower_growth_rate: Some(6.0),
                },
                wallet: WalletSignals {
                    deployer_age: Some(510),
                    cex_deposits_detected: Some(false),
                    known_rug_wallet_connection: Some(false),
                },
                liquidity: LiquiditySignals {
                    lp_locked: Some(true),
                    lp_lock_duration: Some(365),
                    holder_concentration: Some(18.0),
                },
            },
        },
        Project {
            id: "moonrug".to_string(),
            name: "MoonRug Finance".to_string(),
            ticker: "MOONRUG".to_string(),
            chain: Chain::Ethereum,
            contract: Some("0x9f8e7d6c5b4a39281706f5e4d3c2b1a098765432".to_string()),
            x_handle: Some("https://x.com/MoonRugFi".to_string()),
            website: Some("moonrug.finance".to_string()),
            ens: None,
            description: "100x yield aggregator, audit coming soon".to_string(),
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(6),
                    domain_age: Some(4),
                    has_verified_links: Some(false),
                    has_website: Some(true),
                    x_handle: Some("MoonRugFi".to_string()),
                    website: Some("moonrug.finance".to_string()),
                },
                x_behavior: XBehaviorSignals {
                    engagement_rate: Some(72.0),
                    burst_pattern: Some(true),
                    shill_cluster_size: Some(34),
                    follower_growth_rate: Some(410.0),
                },
                wallet: WalletSignals {
                    deployer_age: Some(2),
                    cex_deposits_detected: Some(true),
                    known_rug_wallet_connection: Some(true),
                },
                liquidity: LiquiditySignals {
                    lp_locked: Some(false),
                    lp_lock_duration: None,
                    holder_concentration: Some(88.0),
                },
            },
        },
        Project {
            id: "vapor".to_string(),
            name: "Vapor Protocol".to_string(),
            ticker: "VAPOR".to_string(),
            chain: Chain::Solana,
            contract: Some("VAPRm3Qw8ZtYc5Kd2NbHs7GjUe4XfRaP9vLg6TnBqWz".to_string()),
            x_handle: Some("@vapor_proto".to_string()),
            website: None,
            ens: None,
            description: "AI agent launchpad".to_string(),
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(45),
                    has_website: Some(false),
                    ..Default::default()
                },
                x_behavior: XBehaviorSignals {
                    engagement_rate: Some(28.0),
                    shill_cluster_size: Some(8),
                    ..Default::default()
                },
                wallet: WalletSignals {
                    deployer_age: Some(20),
                    ..Default::default()
                },
                liquidity: LiquiditySignals {
                    lp_locked: Some(true),
                    lp_lock_duration: Some(14),
                    holder_concentration: Some(55.0),
                },
            },
        },
        Project {
            id: "bluechip".to_string(),
            name: "Bluechip DAO".to_string(),
            ticker: "CHIP".to_string(),
            chain: Chain::Ethereum,
            contract: Some("0x1234abcd5678ef901234abcd5678ef901234abcd".to_string()),
            x_handle: Some("@bluechipdao".to_string()),
            website: Some("https://www.bluechip.xyz".to_string()),
            ens: Some("bluechip.eth".to_string()),
            description: "Governance for long-tail treasuries".to_string(),
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(1200),
                    domain_age: Some(1100),
                    has_verified_links: Some(true),
                    has_website: Some(true),
                    x_handle: Some("bluechipdao".to_string()),
                    website: Some("bluechip.xyz".to_string()),
                },
                wallet: WalletSignals {
                    deployer_age: Some(1300),
                    ..Default::default()
                },
                ..Default::default()
            },
        },
    ]
}

fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            handle: "clarpdev".to_string(),
            display_name: "CLARP Dev".to_string(),
            followers: 12_400,
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(900),
                    has_verified_links: Some(true),
                    ..Default::default()
                },
                x_behavior: XBehaviorSignals {
                    engagement_rate: Some(3.2),
                    burst_pattern: Some(false),
                    follower_growth_rate: Some(2.0),
                    ..Default::default()
                },
                ..Default::default()
            },
        },
        Profile {
            handle: "shillmaxi".to_string(),
            display_name: "100x Calls Only".to_string(),
            followers: 88_000,
            signals: ScoreSignals {
                identity: IdentitySignals {
                    x_account_age: Some(12),
                    ..Default::default()
                },
                x_behavior: XBehaviorSignals {
                    engagement_rate: Some(65.0),
                    burst_pattern: Some(true),
                    shill_cluster_size: Some(22),
                    follower_growth_rate: Some(180.0),
                },
                wallet: WalletSignals {
                    cex_deposits_detected: Some(true),
                    ..Default::default()
                },
                ..Default::default()
            },
        },
    ]
}
