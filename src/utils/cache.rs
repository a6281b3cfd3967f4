//! In-Memory Score Cache
//!
//! Thread-safe TTL cache of computed LARP scores, keyed by subject
//! (`project:<id>`, `profile:<handle>`). Keys are lower-cased on the way in.
//! DashMap gives concurrent access without a global lock.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::models::types::LarpScore;
use crate::utils::constants::DEFAULT_CACHE_TTL_SECS;

/// Cache entry with its creation time
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub score: LarpScore,
    pub created_at: Instant,
    pub ttl_secs: u64,
}

impl CacheEntry {
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > Duration::from_secs(self.ttl_secs)
    }

    pub fn remaining_ttl(&self) -> u64 {
        let elapsed = self.created_at.elapsed().as_secs();
        self.ttl_secs.saturating_sub(elapsed)
    }
}

#[derive(Clone)]
pub struct ScoreCache {
    store: Arc<DashMap<String, CacheEntry>>,
    ttl_secs: u64,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL_SECS)
    }

    pub fn with_ttl(ttl_secs: u64) -> Self {
        Self {
            store: Arc::new(DashMap::new()),
            ttl_secs,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Cache key for a project id
    pub fn project_key(id: &str) -> String {
        format!("project:{}", id)
    }

    /// Cache key for a profile handle
    pub fn profile_key(handle: &str) -> String {
        format!("profile:{}", handle)
    }

    #[inline]
    fn normalize_key(key: &str) -> String {
        key.to_lowercase()
    }

    /// Returns the cached score if present and not expired
    pub fn get(&self, key: &str) -> Option<LarpScore> {
        let key = Self::normalize_key(key);

        if let Some(entry) = self.store.get(&key) {
            if entry.is_expired() {
                drop(entry); // release read guard before removal
                self.store.remove(&key);
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("📭 CACHE MISS (expired): {}", key);
                None
            } else {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("✅ CACHE HIT: {} (TTL: {}s remaining)", key, entry.remaining_ttl());
                Some(entry.score.clone())
            }
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("📭 CACHE MISS: {}", key);
            None
        }
    }

    pub fn set(&self, key: &str, score: LarpScore) {
        let key = Self::normalize_key(key);
        let entry = CacheEntry {
            score,
            created_at: Instant::now(),
            ttl_secs: self.ttl_secs,
        };
        debug!("💾 CACHE SET: {} (TTL: {}s)", key, self.ttl_secs);
        self.store.insert(key, entry);
    }

    /// Cached score, or compute, store and return a fresh one
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> LarpScore
    where
        F: FnOnce() -> LarpScore,
    {
        if let Some(score) = self.get(key) {
            return score;
        }
        let score = compute();
        self.set(key, score.clone());
        score
    }

    pub fn invalidate(&self, key: &str) {
        let key = Self::normalize_key(key);
        self.store.remove(&key);
        debug!("🗑️ CACHE INVALIDATE: {}", key);
    }

    /// Drop all expired entries, returning how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let before = self.store.len();
        self.store.retain(|_, entry| !entry.is_expired());
        let removed = before - self.store.len();
        if removed > 0 {
            info!("🧹 CACHE CLEANUP: {} expired entries removed", removed);
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            entries: self.store.len(),
            hits,
            misses,
            hit_rate,
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
    pub ttl_secs: u64,
}
