//! API Request Handlers

use axum::{
    extract::{rejection::JsonRejection, Json, Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::types::*;
use crate::core::entity::{format_entity, resolve_entity, suggest_alternatives};
use crate::core::larp_score::calculate_larp_score;
use crate::models::errors::AppError;
use crate::models::types::{LarpScore, ScoreSignals};
use crate::providers::{Profile, Project, ProjectCatalog};
use crate::utils::cache::ScoreCache;
use crate::utils::telemetry::TelemetryCollector;

/// Handler result: enveloped data, or a status plus enveloped error
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, (StatusCode, Json<ApiResponse<()>>)>;

/// Shared application state
pub struct AppState {
    pub catalog: Arc<dyn ProjectCatalog>,
    pub telemetry: Arc<TelemetryCollector>,
    pub cache: ScoreCache,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn ProjectCatalog>,
        telemetry: Arc<TelemetryCollector>,
        cache_ttl_secs: u64,
    ) -> Self {
        let cache = ScoreCache::with_ttl(cache_ttl_secs);

        // Background task: cleanup expired cache entries every 60 seconds
        let cache_clone = cache.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                cache_clone.cleanup_expired();
            }
        });

        Self {
            catalog,
            telemetry,
            cache,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Cached LARP score for a project. Only fresh computations are counted.
    fn score_project(&self, project: &Project) -> LarpScore {
        self.cache.get_or_compute(&ScoreCache::project_key(&project.id), || {
            let larp = calculate_larp_score(&project.signals);
            self.telemetry.record_score(larp.risk_level);
            larp
        })
    }

    /// Cached LARP score for a profile
    fn score_profile(&self, profile: &Profile) -> LarpScore {
        self.cache.get_or_compute(&ScoreCache::profile_key(&profile.handle), || {
            let larp = calculate_larp_score(&profile.signals);
            self.telemetry.record_score(larp.risk_level);
            larp
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Convert an `AppError` into the enveloped rejection
fn reject(err: AppError, start: Instant) -> (StatusCode, Json<ApiResponse<()>>) {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    warn!(code = err.code_str(), status = status.as_u16(), "{}", err.message);
    (
        status,
        Json(ApiResponse::error(ApiError::from(&err), elapsed_ms(start))),
    )
}

/// Trimmed, non-empty `q` parameter
fn required_query(params: SearchQuery) -> Result<String, AppError> {
    params
        .q
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::bad_request("query parameter `q` is required"))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Stats
// ============================================

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatsData>> {
    let start = Instant::now();
    let telemetry = state.telemetry.get_stats();
    let cache = state.cache.stats();

    debug!(
        "📊 Cache Stats: {} entries, {:.1}% hit rate ({} hits / {} misses)",
        cache.entries, cache.hit_rate, cache.hits, cache.misses
    );

    let data = StatsData {
        flagged_rate: telemetry.flagged_rate(),
        telemetry,
        cache,
        uptime_seconds: state.uptime_seconds(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Resolve & Search
// ============================================

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<ResolveData> {
    let start = Instant::now();
    let query = required_query(params).map_err(|e| reject(e, start))?;

    let entity = resolve_entity(&query);
    state.telemetry.record_search(entity.as_ref().map(|e| e.kind));

    let data = ResolveData {
        display: entity.as_ref().map(format_entity),
        suggestions: suggest_alternatives(&query),
        entity,
        query,
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> ApiResult<SearchData> {
    let start = Instant::now();
    let query = required_query(params).map_err(|e| reject(e, start))?;

    let entity = resolve_entity(&query);
    state.telemetry.record_search(entity.as_ref().map(|e| e.kind));

    let (project, profile) = match &entity {
        Some(entity) => {
            let project = state.catalog.find_project(entity).map(|project| {
                let larp = state.score_project(&project);
                ProjectDetail {
                    project,
                    larp_score: larp.into(),
                }
            });
            let profile = state.catalog.find_profile(entity).map(|profile| {
                let larp = state.score_profile(&profile);
                ProfileDetail {
                    profile,
                    larp_score: larp.into(),
                }
            });
            (project, profile)
        }
        None => (None, None),
    };

    info!(
        kind = entity.as_ref().map(|e| e.kind.as_str()).unwrap_or("unresolved"),
        project = project.is_some(),
        profile = profile.is_some(),
        "🔍 Search completed"
    );

    let data = SearchData {
        display: entity.as_ref().map(format_entity),
        suggestions: suggest_alternatives(&query),
        entity,
        project,
        profile,
        query,
    };

    Ok(Json(ApiResponse::success(data, elapsed_ms(start))))
}

// ============================================
// Projects
// ============================================

pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<ProjectSummary>>> {
    let start = Instant::now();

    let data = state
        .catalog
        .list_projects()
        .iter()
        .map(|project| ProjectSummary::new(project, &state.score_project(project)))
        .collect();

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<ProjectDetail> {
    let start = Instant::now();

    let project = state
        .catalog
        .get_project(&id)
        .ok_or_else(|| reject(AppError::not_found(format!("project '{}' not found", id)), start))?;
    let larp = state.score_project(&project);

    Ok(Json(ApiResponse::success(
        ProjectDetail {
            project,
            larp_score: larp.into(),
        },
        elapsed_ms(start),
    )))
}

// ============================================
// Ad-hoc Scoring
// ============================================

pub async fn score_signals(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreSignals>, JsonRejection>,
) -> ApiResult<ScoreResponse> {
    let start = Instant::now();
    let Json(signals) = payload.map_err(|rejection| {
        reject(
            AppError::bad_request(format!("invalid signals body: {}", rejection.body_text())),
            start,
        )
    })?;

    let larp = calculate_larp_score(&signals);
    state.telemetry.record_score(larp.risk_level);
    info!(
        score = larp.score,
        risk = larp.risk_level.as_str(),
        populated = signals.populated(),
        "🧮 Scored ad-hoc signals"
    );

    Ok(Json(ApiResponse::success(larp.into(), elapsed_ms(start))))
}
