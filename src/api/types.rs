//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::AppError;
use crate::models::types::{Chain, Entity, LarpScore, RiskLevel};
use crate::providers::{Profile, Project};
use crate::utils::cache::CacheStats;
use crate::utils::display::{
    get_confidence_label, get_risk_level_color, get_score_color, get_score_label,
};
use crate::utils::telemetry::TelemetryStats;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: err.source.as_ref().map(|source| source.to_string()),
        }
    }
}

// ============================================
// Search / Resolve
// ============================================

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveData {
    pub query: String,
    pub entity: Option<Entity>,
    /// Canonical display form (`$TICKER`, `@handle`, `0x1234...abcd`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    pub query: String,
    pub entity: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    pub project: Option<ProjectDetail>,
    pub profile: Option<ProfileDetail>,
    pub suggestions: Vec<String>,
}

// ============================================
// Projects & Profiles
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub chain: Chain,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub color: String,
    pub label: String,
    pub top_tags: Vec<String>,
}

impl ProjectSummary {
    pub fn new(project: &Project, larp: &LarpScore) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            ticker: project.ticker.clone(),
            chain: project.chain,
            score: larp.score,
            risk_level: larp.risk_level,
            color: get_score_color(larp.score).to_string(),
            label: get_score_label(larp.score).to_string(),
            top_tags: larp.top_tags.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub larp_score: ScoreResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetail {
    #[serde(flatten)]
    pub profile: Profile,
    pub larp_score: ScoreResponse,
}

// ============================================
// Scores
// ============================================

/// LARP score plus the display values the dashboard renders
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub larp: LarpScore,
    pub color: String,
    pub label: String,
    pub risk_color: String,
    pub confidence_label: String,
}

impl From<LarpScore> for ScoreResponse {
    fn from(larp: LarpScore) -> Self {
        Self {
            color: get_score_color(larp.score).to_string(),
            label: get_score_label(larp.score).to_string(),
            risk_color: get_risk_level_color(larp.risk_level).to_string(),
            confidence_label: get_confidence_label(larp.confidence).to_string(),
            larp,
        }
    }
}

// ============================================
// Stats / Health
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub telemetry: TelemetryStats,
    pub flagged_rate: f64,
    pub cache: CacheStats,
    pub uptime_seconds: u64,
    pub api_version: String,
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
