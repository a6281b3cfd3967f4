//! Configuration module for the CLARP Terminal API
//!
//! Values come from the environment; defaults live in utils/constants.rs.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::models::errors::{AppError, AppResult};
use crate::utils::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TELEMETRY_DIR,
};

/// Runtime configuration for the API server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// TTL of cached LARP scores
    pub cache_ttl_secs: u64,
    /// Where telemetry snapshots are exported on shutdown
    pub telemetry_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            telemetry_dir: PathBuf::from(DEFAULT_TELEMETRY_DIR),
        }
    }
}

impl ServerConfig {
    /// Load from process environment.
    ///
    /// `PORT` (set by most PaaS hosts) wins over `CLARP_PORT`.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("CLARP_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT").or_else(|| lookup("CLARP_PORT")) {
            Some(raw) => parse_value("PORT", &raw)?,
            None => defaults.port,
        };

        let cache_ttl_secs = match lookup("CLARP_CACHE_TTL_SECS") {
            Some(raw) => parse_value("CLARP_CACHE_TTL_SECS", &raw)?,
            None => defaults.cache_ttl_secs,
        };

        let telemetry_dir = lookup("CLARP_TELEMETRY_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.telemetry_dir);

        let config = Self {
            host,
            port,
            cache_ttl_secs,
            telemetry_dir,
        };
        info!(
            host = %config.host,
            port = config.port,
            cache_ttl_secs = config.cache_ttl_secs,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Socket address to bind
    pub fn listen_addr(&self) -> AppResult<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_config(key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_port_prefers_paas_variable() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("PORT", "9000"), ("CLARP_PORT", "7000")]))
                .unwrap();
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_ttl_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("CLARP_CACHE_TTL_SECS", "soon")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn test_listen_addr() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("CLARP_HOST", "127.0.0.1"),
            ("CLARP_PORT", "3001"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr().unwrap().port(), 3001);
    }
}
