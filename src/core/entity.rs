//! Entity Resolver
//!
//! Classifies a free-text search string into exactly one typed identifier.
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. `$TICKER` / `#TICKER`
//! 2. Solana address (base58, 32-44 chars)
//! 3. EVM address (`0x` + 40 hex)
//! 4. X handle (`@handle`, `x.com/handle`, `twitter.com/handle`)
//! 5. ENS name (`*.eth`)
//! 6. Domain (bare host, or the host of an `http(s)://` URL)
//! 7. Bare string that is a valid handle
//!
//! Tickers always need an explicit prefix so a bare `clarp` is read as a
//! handle, never as a ticker.

use tracing::trace;

use crate::models::types::{Chain, Entity, EntityType};
use crate::utils::constants::{
    BASE58_ALPHABET, EVM_ADDRESS_HEX_LEN, HANDLE_MAX_LEN, HANDLE_MIN_LEN, SOLANA_ADDRESS_MAX_LEN,
    SOLANA_ADDRESS_MIN_LEN, TICKER_SUGGESTION_MAX_LEN, X_HOSTS,
};

/// Resolve a search string. Returns `None` for blank or unclassifiable input.
pub fn resolve_entity(input: &str) -> Option<Entity> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }

    let entity = if let Some(ticker) = ticker_symbol(value) {
        build(EntityType::Ticker, value, ticker.to_uppercase(), None)
    } else if is_solana_address(value) {
        build(EntityType::Contract, value, value.to_string(), Some(Chain::Solana))
    } else if is_evm_address(value) {
        build(
            EntityType::Contract,
            value,
            value.to_ascii_lowercase(),
            Some(Chain::Ethereum),
        )
    } else if let Some(handle) = explicit_handle(value) {
        build(EntityType::XHandle, value, handle, None)
    } else if is_ens_name(value) {
        build(
            EntityType::Ens,
            value,
            value.to_ascii_lowercase(),
            Some(Chain::Ethereum),
        )
    } else if is_domain(value) {
        build(EntityType::Domain, value, value.to_ascii_lowercase(), None)
    } else if let Some(host) = url_host(value) {
        if is_ens_name(&host) {
            build(EntityType::Ens, value, host, Some(Chain::Ethereum))
        } else {
            build(EntityType::Domain, value, host, None)
        }
    } else if is_valid_handle(value) {
        build(EntityType::XHandle, value, value.to_ascii_lowercase(), None)
    } else {
        trace!(query = value, "unresolved");
        return None;
    };

    trace!(query = value, kind = entity.kind.as_str(), normalized = %entity.normalized, "resolved");
    Some(entity)
}

fn build(kind: EntityType, value: &str, normalized: String, chain: Option<Chain>) -> Entity {
    Entity {
        kind,
        value: value.to_string(),
        normalized,
        chain,
    }
}

/// Everything after a `$` or `#` prefix, taken verbatim (may be empty)
fn ticker_symbol(value: &str) -> Option<&str> {
    value.strip_prefix('$').or_else(|| value.strip_prefix('#'))
}

/// `@handle` or an x.com / twitter.com profile URL
fn explicit_handle(value: &str) -> Option<String> {
    if let Some(handle) = value.strip_prefix('@') {
        return is_valid_handle(handle).then(|| handle.to_ascii_lowercase());
    }
    handle_from_url(value)
}

fn handle_from_url(value: &str) -> Option<String> {
    let lower = value.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    X_HOSTS.iter().find_map(|host| {
        let path = rest.strip_prefix(host)?.strip_prefix('/')?;
        let segment = path.split(['/', '?', '#']).next()?;
        is_valid_handle(segment).then(|| segment.to_string())
    })
}

/// Lower-cased host of an `http(s)://` URL, if that host is a domain
fn url_host(value: &str) -> Option<String> {
    let lower = value.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    is_domain(host).then(|| host.to_string())
}

// ============================================
// Predicates
// ============================================

/// Base58, 32-44 characters, no `0x` prefix
pub fn is_solana_address(value: &str) -> bool {
    (SOLANA_ADDRESS_MIN_LEN..=SOLANA_ADDRESS_MAX_LEN).contains(&value.len())
        && !value.starts_with("0x")
        && value.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// `0x` followed by exactly 40 hex characters (any case)
pub fn is_evm_address(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex_part) => hex_part.len() == EVM_ADDRESS_HEX_LEN && hex::decode(hex_part).is_ok(),
        None => false,
    }
}

pub fn is_contract_address(value: &str) -> bool {
    is_solana_address(value) || is_evm_address(value)
}

/// 4-15 characters of `[A-Za-z0-9_]`
pub fn is_valid_handle(value: &str) -> bool {
    (HANDLE_MIN_LEN..=HANDLE_MAX_LEN).contains(&value.len())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Name ending in `.eth` with a non-empty label in front
pub fn is_ens_name(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    match lower.strip_suffix(".eth") {
        Some(name) => !name.is_empty() && name.split('.').all(is_dns_label),
        None => false,
    }
}

/// Dotted host name whose TLD has at least two letters
pub fn is_domain(value: &str) -> bool {
    let labels: Vec<&str> = value.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_dns_label(label)) {
        return false;
    }
    labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false)
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// ============================================
// Helpers
// ============================================

/// Bare lower-cased handle from a profile URL, `@handle` or bare handle
pub fn extract_handle(input: &str) -> Option<String> {
    let value = input.trim();
    if value.is_empty() {
        return None;
    }
    if let Some(handle) = handle_from_url(value) {
        return Some(handle);
    }
    let bare = value.strip_prefix('@').unwrap_or(value);
    is_valid_handle(bare).then(|| bare.to_ascii_lowercase())
}

/// Canonical display form of an entity
pub fn format_entity(entity: &Entity) -> String {
    match entity.kind {
        EntityType::Ticker => format!("${}", entity.normalized),
        EntityType::XHandle => format!("@{}", entity.normalized),
        EntityType::Contract => truncate_address(&entity.normalized),
        EntityType::Ens | EntityType::Domain => entity.normalized.clone(),
    }
}

/// `first6...last4`
fn truncate_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Alternate readings of a query (`$QUERY`, `@query`), excluding the one the
/// resolver already picked
pub fn suggest_alternatives(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    let bare = trimmed.trim_start_matches(['$', '#', '@']).trim();
    if bare.is_empty() {
        return Vec::new();
    }

    let current = resolve_entity(trimmed).map(|entity| format_entity(&entity));
    let mut suggestions = Vec::with_capacity(2);

    if bare.len() <= TICKER_SUGGESTION_MAX_LEN && bare.chars().all(|c| c.is_ascii_alphanumeric()) {
        suggestions.push(format!("${}", bare.to_ascii_uppercase()));
    }
    if is_valid_handle(bare) {
        suggestions.push(format!("@{}", bare.to_ascii_lowercase()));
    }

    suggestions.retain(|s| Some(s) != current.as_ref());
    suggestions
}
