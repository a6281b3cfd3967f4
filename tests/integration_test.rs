//! Integration tests for CLARP Terminal

use clarp_terminal::core::entity::{format_entity, resolve_entity, suggest_alternatives};
use clarp_terminal::core::scoring::{
    calculate_identity_score, calculate_liquidity_score, calculate_wallet_score,
    calculate_x_behavior_score,
};
use clarp_terminal::models::types::*;
use clarp_terminal::providers::{InMemoryCatalog, ProjectCatalog};
use clarp_terminal::utils::display::{get_risk_level_color, get_score_color, get_score_label};
use clarp_terminal::{calculate_larp_score, resolve_entity as resolve_from_root};

const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn positive_bundle() -> ScoreSignals {
    ScoreSignals {
        identity: IdentitySignals {
            x_account_age: Some(900),
            domain_age: Some(800),
            has_verified_links: Some(true),
            has_website: Some(true),
            ..Default::default()
        },
        x_behavior: XBehaviorSignals {
            engagement_rate: Some(3.0),
            burst_pattern: Some(false),
            shill_cluster_size: Some(0),
            follower_growth_rate: Some(4.0),
        },
        wallet: WalletSignals {
            deployer_age: Some(700),
            cex_deposits_detected: Some(false),
            known_rug_wallet_connection: Some(false),
        },
        liquidity: LiquiditySignals {
            lp_locked: Some(true),
            lp_lock_duration: Some(400),
            holder_concentration: Some(12.0),
        },
    }
}

fn negative_bundle() -> ScoreSignals {
    ScoreSignals {
        identity: IdentitySignals {
            x_account_age: Some(3),
            domain_age: Some(2),
            has_verified_links: Some(false),
            has_website: Some(false),
            ..Default::default()
        },
        x_behavior: XBehaviorSignals {
            engagement_rate: Some(80.0),
            burst_pattern: Some(true),
            shill_cluster_size: Some(40),
            follower_growth_rate: Some(300.0),
        },
        wallet: WalletSignals {
            deployer_age: Some(1),
            cex_deposits_detected: Some(true),
            known_rug_wallet_connection: Some(true),
        },
        liquidity: LiquiditySignals {
            lp_locked: Some(false),
            lp_lock_duration: None,
            holder_concentration: Some(92.0),
        },
    }
}

// ============================================
// Entity resolution
// ============================================

#[test]
fn test_prefixed_queries_are_tickers() {
    for input in ["$clarp", "#sol", "$Eth", "$A1", "#moonRUG", "$x"] {
        let entity = resolve_entity(input).unwrap();
        assert_eq!(entity.kind, EntityType::Ticker, "{}", input);
        assert_eq!(entity.normalized, input[1..].to_uppercase(), "{}", input);
        assert_eq!(entity.chain, None);
    }
}

#[test]
fn test_evm_addresses_normalize_lowercase() {
    for seed in [0u8, 7, 0x5a, 0xff] {
        let bytes: Vec<u8> = (0..20u8).map(|i| i.wrapping_mul(31).wrapping_add(seed)).collect();
        let lower = format!("0x{}", hex::encode(&bytes));
        let mixed = format!("0x{}", hex::encode_upper(&bytes));

        for input in [&lower, &mixed] {
            let entity = resolve_entity(input).unwrap();
            assert_eq!(entity.kind, EntityType::Contract);
            assert_eq!(entity.chain, Some(Chain::Ethereum));
            assert_eq!(entity.normalized, input.to_lowercase());
        }
    }
}

#[test]
fn test_base58_strings_are_solana_contracts() {
    let alphabet: Vec<char> = BASE58.chars().collect();
    for len in 32..=44usize {
        let address: String = (0..len)
            .map(|i| alphabet[(i * 7 + len) % alphabet.len()])
            .collect();
        let entity = resolve_entity(&address).unwrap();
        assert_eq!(entity.kind, EntityType::Contract, "{}", address);
        assert_eq!(entity.chain, Some(Chain::Solana), "{}", address);
        assert_eq!(entity.normalized, address);
    }
}

#[test]
fn test_empty_and_whitespace_resolve_to_none() {
    assert!(resolve_entity("").is_none());
    assert!(resolve_entity("   ").is_none());
    assert!(resolve_from_root("\t\n").is_none());
}

#[test]
fn test_bare_string_defaults_to_handle() {
    let entity = resolve_entity("ClArP").unwrap();
    assert_eq!(entity.kind, EntityType::XHandle);
    assert_eq!(entity.normalized, "clarp");
}

#[test]
fn test_resolution_priority() {
    let cases = [
        ("@clarpdev", EntityType::XHandle),
        ("https://twitter.com/ShillMaxi", EntityType::XHandle),
        ("www.x.com/clarpdev", EntityType::XHandle),
        ("vitalik.eth", EntityType::Ens),
        ("clarp.lol", EntityType::Domain),
    ];
    for (input, expected) in cases {
        assert_eq!(resolve_entity(input).unwrap().kind, expected, "{}", input);
    }
    assert!(resolve_entity("not a thing!").is_none());
}

#[test]
fn test_normalized_is_idempotent() {
    let inputs = [
        "ClArP",
        "@Vapor_Proto",
        "x.com/MoonRugFi",
        "0x9F8E7D6C5B4A39281706F5E4D3C2B1A098765432",
        "VAPRm3Qw8ZtYc5Kd2NbHs7GjUe4XfRaP9vLg6TnBqWz",
        "BlueChip.ETH",
        "Clarp.Lol",
    ];
    for input in inputs {
        let first = resolve_entity(input).unwrap();
        let second = resolve_entity(&first.normalized).unwrap();
        assert_eq!(second.kind, first.kind, "{}", input);
        assert_eq!(second.normalized, first.normalized, "{}", input);
    }
}

#[test]
fn test_ticker_display_form_is_stable() {
    let first = resolve_entity("$clarp").unwrap();
    let display = format_entity(&first);
    assert_eq!(display, "$CLARP");
    let again = resolve_entity(&display).unwrap();
    assert_eq!(again.kind, EntityType::Ticker);
    assert_eq!(again.normalized, first.normalized);
    assert_eq!(format_entity(&again), display);
}

#[test]
fn test_suggestions() {
    assert!(suggest_alternatives("").is_empty());
    let suggestions = suggest_alternatives("clarp");
    assert!(suggestions.contains(&"$CLARP".to_string()));
}

// ============================================
// Scoring modules
// ============================================

#[test]
fn test_module_scores_stay_in_range() {
    for signals in [ScoreSignals::default(), positive_bundle(), negative_bundle()] {
        let modules = [
            calculate_identity_score(&signals.identity),
            calculate_x_behavior_score(&signals.x_behavior),
            calculate_wallet_score(&signals.wallet),
            calculate_liquidity_score(&signals.liquidity),
        ];
        for module in modules {
            assert!(module.score <= 100, "{} = {}", module.name, module.score);
        }
    }
}

#[test]
fn test_identity_account_age_calibration() {
    let young = calculate_identity_score(&IdentitySignals {
        x_account_age: Some(5),
        ..Default::default()
    });
    assert!(young.score > 20);
    assert_eq!(young.name, "Team & Identity Risk");
    assert_eq!(young.weight, 0.25);

    let old = calculate_identity_score(&IdentitySignals {
        x_account_age: Some(500),
        ..Default::default()
    });
    assert!(old.score < 20);
}

#[test]
fn test_new_account_and_domain_flag_critical() {
    let module = calculate_identity_score(&IdentitySignals {
        x_account_age: Some(2),
        domain_age: Some(3),
        ..Default::default()
    });
    assert!(module.evidence.iter().any(|e| e.severity == Severity::Critical));
}

#[test]
fn test_x_behavior_calibration() {
    let manipulated = calculate_x_behavior_score(&XBehaviorSignals {
        engagement_rate: Some(70.0),
        burst_pattern: Some(true),
        shill_cluster_size: Some(30),
        ..Default::default()
    });
    assert!(manipulated.score > 50);
    assert_eq!(manipulated.name, "Narrative Manipulation Risk");

    let organic = calculate_x_behavior_score(&XBehaviorSignals {
        engagement_rate: Some(5.0),
        burst_pattern: Some(false),
        shill_cluster_size: Some(0),
        ..Default::default()
    });
    assert!(organic.score < 20);
}

#[test]
fn test_wallet_calibration() {
    let cex = calculate_wallet_score(&WalletSignals {
        cex_deposits_detected: Some(true),
        ..Default::default()
    });
    assert!(cex.score > 25);
    assert_eq!(cex.name, "Wallet Behavior Risk");

    let fresh = calculate_wallet_score(&WalletSignals {
        deployer_age: Some(2),
        ..Default::default()
    });
    assert!(fresh.score > 20);

    let rug = calculate_wallet_score(&WalletSignals {
        known_rug_wallet_connection: Some(true),
        ..Default::default()
    });
    assert!(rug.score > 20);
}

#[test]
fn test_liquidity_calibration() {
    let unlocked = calculate_liquidity_score(&LiquiditySignals {
        lp_locked: Some(false),
        ..Default::default()
    });
    assert!(unlocked.score > 25);
    assert_eq!(unlocked.name, "Token & Liquidity Risk");

    let concentrated = calculate_liquidity_score(&LiquiditySignals {
        holder_concentration: Some(90.0),
        ..Default::default()
    });
    assert!(concentrated.score > 15);
}

// ============================================
// Combined score
// ============================================

#[test]
fn test_positive_bundle_is_low_risk() {
    let larp = calculate_larp_score(&positive_bundle());
    assert_eq!(larp.risk_level, RiskLevel::Low);
    assert_eq!(larp.confidence, Confidence::High);
}

#[test]
fn test_negative_bundle_is_high_or_critical() {
    let larp = calculate_larp_score(&negative_bundle());
    assert!(matches!(larp.risk_level, RiskLevel::High | RiskLevel::Critical));
    assert!(!larp.top_tags.is_empty());
    assert!(larp.top_tags.len() <= 6);
}

#[test]
fn test_empty_bundle_breakdown_shape() {
    let larp = calculate_larp_score(&ScoreSignals::default());
    assert_eq!(larp.score, 0);
    assert_eq!(larp.risk_level, RiskLevel::Low);
    assert_eq!(larp.confidence, Confidence::Low);
    assert!(larp.top_tags.is_empty());

    let json = serde_json::to_value(&larp).unwrap();
    let breakdown = json["breakdown"].as_object().unwrap();
    let mut keys: Vec<&str> = breakdown.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["identity", "liquidity", "wallet", "xBehavior"]);

    let weights: f64 = larp.breakdown.modules().iter().map(|m| m.weight).sum();
    assert!((weights - 1.0).abs() < 1e-9);
}

#[test]
fn test_empty_json_object_scores() {
    let signals: ScoreSignals = serde_json::from_str("{}").unwrap();
    let larp = calculate_larp_score(&signals);
    assert_eq!(larp.risk_level, RiskLevel::Low);
}

// ============================================
// Display mapping
// ============================================

#[test]
fn test_display_boundaries() {
    assert_eq!(get_score_color(90), "#7f1d1d");
    assert_eq!(get_score_color(89), "#dc2626");
    assert_eq!(get_score_label(90), "Confirmed LARP");
    assert_eq!(get_score_label(70), "Highly Suspicious");
    assert_eq!(get_score_label(50), "Yellow Flags");
    assert_eq!(get_score_label(30), "Probably Fine");
    assert_eq!(get_score_label(29), "Appears Legitimate");
    assert_eq!(get_risk_level_color(RiskLevel::Low), "#22c55e");
}

// ============================================
// Catalog end-to-end
// ============================================

#[test]
fn test_seeded_catalog_search_flow() {
    let catalog = InMemoryCatalog::seeded();

    let entity = resolve_entity("$MOONRUG").unwrap();
    let project = catalog.find_project(&entity).unwrap();
    let larp = calculate_larp_score(&project.signals);
    assert_eq!(larp.risk_level, RiskLevel::Critical);

    let entity = resolve_entity("$clarp").unwrap();
    let project = catalog.find_project(&entity).unwrap();
    assert_eq!(calculate_larp_score(&project.signals).risk_level, RiskLevel::Low);
}
