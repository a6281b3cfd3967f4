//! Constants Module - Single Source of Truth
//!
//! Module weights, evidence thresholds, display palettes and runtime
//! defaults. Scoring code reads its numbers from here only.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "CLARP Terminal";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Default cache TTL (seconds)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Default telemetry export directory
pub const DEFAULT_TELEMETRY_DIR: &str = "./telemetry";

// ============================================
// MODULE NAMES & WEIGHTS (sum to 1.0)
// ============================================

pub const IDENTITY_MODULE_NAME: &str = "Team & Identity Risk";
pub const X_BEHAVIOR_MODULE_NAME: &str = "Narrative Manipulation Risk";
pub const WALLET_MODULE_NAME: &str = "Wallet Behavior Risk";
pub const LIQUIDITY_MODULE_NAME: &str = "Token & Liquidity Risk";

pub const IDENTITY_WEIGHT: f64 = 0.25;
pub const X_BEHAVIOR_WEIGHT: f64 = 0.25;
pub const WALLET_WEIGHT: f64 = 0.30;
pub const LIQUIDITY_WEIGHT: f64 = 0.20;

// ============================================
// RISK LEVEL THRESHOLDS (combined score)
// ============================================

pub const RISK_CRITICAL_MIN: u8 = 70;
pub const RISK_HIGH_MIN: u8 = 50;
pub const RISK_MEDIUM_MIN: u8 = 30;

/// Populated signal fields needed for each confidence tier
pub const CONFIDENCE_HIGH_MIN_SIGNALS: usize = 10;
pub const CONFIDENCE_MEDIUM_MIN_SIGNALS: usize = 5;

/// Maximum number of summary tags on a LARP score
pub const MAX_TOP_TAGS: usize = 6;

// ============================================
// IDENTITY POINT TABLE
// ============================================

/// X account age (days) -> points
pub const X_AGE_CRITICAL_DAYS: u32 = 10;
pub const X_AGE_NEW_DAYS: u32 = 30;
pub const X_AGE_WARNING_DAYS: u32 = 90;
pub const X_AGE_YOUNG_DAYS: u32 = 365;
pub const X_AGE_CRITICAL_POINTS: i32 = 40;
pub const X_AGE_NEW_POINTS: i32 = 30;
pub const X_AGE_WARNING_POINTS: i32 = 20;
pub const X_AGE_YOUNG_POINTS: i32 = 8;

/// Domain age (days) -> points
pub const DOMAIN_AGE_CRITICAL_DAYS: u32 = 7;
pub const DOMAIN_AGE_WARNING_DAYS: u32 = 30;
pub const DOMAIN_AGE_YOUNG_DAYS: u32 = 90;
pub const DOMAIN_AGE_CRITICAL_POINTS: i32 = 30;
pub const DOMAIN_AGE_WARNING_POINTS: i32 = 20;
pub const DOMAIN_AGE_YOUNG_POINTS: i32 = 8;

pub const UNVERIFIED_LINKS_POINTS: i32 = 15;
/// Credit for cross-verified X <-> website links
pub const VERIFIED_LINKS_CREDIT: i32 = -5;
pub const NO_WEBSITE_POINTS: i32 = 15;

// ============================================
// X BEHAVIOR POINT TABLE
// ============================================

pub const ENGAGEMENT_CRITICAL_PCT: f64 = 50.0;
pub const ENGAGEMENT_WARNING_PCT: f64 = 20.0;
pub const ENGAGEMENT_CRITICAL_POINTS: i32 = 30;
pub const ENGAGEMENT_WARNING_POINTS: i32 = 15;

pub const BURST_PATTERN_POINTS: i32 = 25;

pub const SHILL_CLUSTER_CRITICAL_SIZE: u32 = 20;
pub const SHILL_CLUSTER_WARNING_SIZE: u32 = 5;
pub const SHILL_CLUSTER_CRITICAL_POINTS: i32 = 30;
pub const SHILL_CLUSTER_WARNING_POINTS: i32 = 15;
pub const SHILL_CLUSTER_MINOR_POINTS: i32 = 5;

pub const FOLLOWER_GROWTH_WARNING_PCT: f64 = 100.0;
pub const FOLLOWER_GROWTH_INFO_PCT: f64 = 50.0;
pub const FOLLOWER_GROWTH_WARNING_POINTS: i32 = 15;
pub const FOLLOWER_GROWTH_INFO_POINTS: i32 = 8;

// ============================================
// WALLET POINT TABLE
// ============================================

pub const DEPLOYER_AGE_CRITICAL_DAYS: u32 = 7;
pub const DEPLOYER_AGE_WARNING_DAYS: u32 = 30;
pub const DEPLOYER_AGE_YOUNG_DAYS: u32 = 90;
pub const DEPLOYER_AGE_CRITICAL_POINTS: i32 = 30;
pub const DEPLOYER_AGE_WARNING_POINTS: i32 = 15;
pub const DEPLOYER_AGE_YOUNG_POINTS: i32 = 5;

pub const CEX_DEPOSITS_POINTS: i32 = 35;
pub const RUG_CONNECTION_POINTS: i32 = 40;

// ============================================
// LIQUIDITY POINT TABLE
// ============================================

pub const LP_UNLOCKED_POINTS: i32 = 35;
pub const LP_LOCK_SHORT_DAYS: u32 = 30;
pub const LP_LOCK_MEDIUM_DAYS: u32 = 180;
pub const LP_LOCK_LONG_DAYS: u32 = 365;
pub const LP_LOCK_SHORT_POINTS: i32 = 20;
pub const LP_LOCK_MEDIUM_POINTS: i32 = 10;
/// Credit for a lock of a year or more
pub const LP_LOCK_LONG_CREDIT: i32 = -5;

pub const HOLDER_CONCENTRATION_CRITICAL_PCT: f64 = 80.0;
pub const HOLDER_CONCENTRATION_WARNING_PCT: f64 = 50.0;
pub const HOLDER_CONCENTRATION_INFO_PCT: f64 = 30.0;
pub const HOLDER_CONCENTRATION_CRITICAL_POINTS: i32 = 30;
pub const HOLDER_CONCENTRATION_WARNING_POINTS: i32 = 20;
pub const HOLDER_CONCENTRATION_INFO_POINTS: i32 = 10;

// ============================================
// DISPLAY PALETTE
// ============================================

pub const COLOR_DARK_RED: &str = "#7f1d1d";
pub const COLOR_RED: &str = "#dc2626";
pub const COLOR_ORANGE: &str = "#f97316";
pub const COLOR_YELLOW: &str = "#eab308";
pub const COLOR_GREEN: &str = "#22c55e";
pub const COLOR_BLUE: &str = "#3b82f6";

pub const SCORE_BAND_CONFIRMED: u8 = 90;
pub const SCORE_BAND_SUSPICIOUS: u8 = 70;
pub const SCORE_BAND_YELLOW_FLAGS: u8 = 50;
pub const SCORE_BAND_PROBABLY_FINE: u8 = 30;

// ============================================
// ENTITY FORMATS
// ============================================

/// Base58 alphabet used for Solana addresses (no 0, I, O, l)
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
pub const SOLANA_ADDRESS_MIN_LEN: usize = 32;
pub const SOLANA_ADDRESS_MAX_LEN: usize = 44;
pub const EVM_ADDRESS_HEX_LEN: usize = 40;
pub const HANDLE_MIN_LEN: usize = 4;
pub const HANDLE_MAX_LEN: usize = 15;
/// Longest bare string offered as a `$TICKER` alternative
pub const TICKER_SUGGESTION_MAX_LEN: usize = 10;
/// Hosts whose first path segment is an X handle
pub const X_HOSTS: [&str; 2] = ["x.com", "twitter.com"];
