//! CLARP Terminal Library
//!
//! Trust scoring for crypto projects and the X accounts around them:
//! - Entity resolution of free-text queries (`$TICKER`, contract, `@handle`,
//!   domain, ENS)
//! - Four weighted risk modules (identity, X behavior, wallet, liquidity)
//! - A combined 0-100 LARP score with risk level, confidence and top tags
//!
//! The scoring core is pure: no I/O, no clocks beyond evidence timestamps.
//! The REST API and the catalog sit on top of it.

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::entity::{format_entity, resolve_entity, suggest_alternatives};
pub use crate::core::larp_score::calculate_larp_score;
pub use models::config::ServerConfig;
pub use models::errors::{AppError, AppResult, ErrorCode};
pub use models::types::{Entity, EntityType, LarpScore, RiskLevel, ScoreSignals};
pub use providers::{InMemoryCatalog, ProjectCatalog};
pub use utils::{ScoreCache, TelemetryCollector};
