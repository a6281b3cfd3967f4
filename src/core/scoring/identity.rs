//! Team & Identity Risk
//!
//! Young X accounts, freshly registered domains and missing cross-links
//! between the two are the cheapest tells of a throwaway project.

use super::ScoreAccumulator;
use crate::core::entity::extract_handle;
use crate::models::types::{EvidenceType, IdentitySignals, ModuleScore, Severity};
use crate::utils::constants::*;

pub fn calculate_identity_score(signals: &IdentitySignals) -> ModuleScore {
    let mut acc = ScoreAccumulator::new("identity");

    if let Some(age) = signals.x_account_age {
        let profile_url = signals
            .x_handle
            .as_deref()
            .and_then(extract_handle)
            .map(|handle| format!("https://x.com/{}", handle));

        let (severity, points, summary, tag) = if age < X_AGE_CRITICAL_DAYS {
            (
                Severity::Critical,
                X_AGE_CRITICAL_POINTS,
                format!("X account is only {} days old", age),
                "New X Account",
            )
        } else if age < X_AGE_NEW_DAYS {
            (
                Severity::Warning,
                X_AGE_NEW_POINTS,
                format!("X account was created {} days ago", age),
                "New X Account",
            )
        } else if age < X_AGE_WARNING_DAYS {
            (
                Severity::Warning,
                X_AGE_WARNING_POINTS,
                format!("X account is less than 3 months old ({} days)", age),
                "Young X Account",
            )
        } else if age < X_AGE_YOUNG_DAYS {
            (
                Severity::Info,
                X_AGE_YOUNG_POINTS,
                format!("X account is less than a year old ({} days)", age),
                "Young X Account",
            )
        } else {
            (
                Severity::Info,
                0,
                format!("Established X account ({} days)", age),
                "Established Account",
            )
        };
        acc.flag(EvidenceType::AccountAge, severity, points, summary, tag).url = profile_url;
    }

    if let Some(age) = signals.domain_age {
        let site_url = signals.website.as_deref().map(site_url);

        let finding = if age < DOMAIN_AGE_CRITICAL_DAYS {
            Some((
                Severity::Critical,
                DOMAIN_AGE_CRITICAL_POINTS,
                format!("Website domain was registered {} days ago", age),
                "Fresh Domain",
            ))
        } else if age < DOMAIN_AGE_WARNING_DAYS {
            Some((
                Severity::Warning,
                DOMAIN_AGE_WARNING_POINTS,
                format!("Website domain is less than a month old ({} days)", age),
                "Fresh Domain",
            ))
        } else if age < DOMAIN_AGE_YOUNG_DAYS {
            Some((
                Severity::Info,
                DOMAIN_AGE_YOUNG_POINTS,
                format!("Website domain is {} days old", age),
                "Young Domain",
            ))
        } else {
            None
        };

        if let Some((severity, points, summary, tag)) = finding {
            acc.flag(EvidenceType::DomainAge, severity, points, summary, tag).url = site_url;
        }
    }

    match signals.has_verified_links {
        Some(false) => {
            acc.flag(
                EvidenceType::VerifiedLinks,
                Severity::Warning,
                UNVERIFIED_LINKS_POINTS,
                "No verified link between the X account and the website".to_string(),
                "Unverified Links",
            );
        }
        Some(true) => {
            acc.flag(
                EvidenceType::VerifiedLinks,
                Severity::Info,
                VERIFIED_LINKS_CREDIT,
                "X account and website link to each other".to_string(),
                "Verified Links",
            );
        }
        None => {}
    }

    if signals.has_website == Some(false) {
        acc.flag(
            EvidenceType::Website,
            Severity::Warning,
            NO_WEBSITE_POINTS,
            "No project website found".to_string(),
            "No Website",
        );
    }

    acc.finish(IDENTITY_MODULE_NAME, IDENTITY_WEIGHT)
}

fn site_url(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_identity() {
        let score = calculate_identity_score(&IdentitySignals::default());
        assert_eq!(score.name, "Team & Identity Risk");
        assert_eq!(score.weight, 0.25);
        assert_eq!(score.score, 0);
        assert!(score.evidence.is_empty());
    }

    #[test]
    fn test_new_account_is_risky() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(5),
            ..Default::default()
        });
        assert!(score.score > 20, "Score was {}", score.score);
        assert_eq!(score.evidence[0].severity, Severity::Critical);
    }

    #[test]
    fn test_old_account_is_low_risk() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(500),
            ..Default::default()
        });
        assert!(score.score < 20, "Score was {}", score.score);
        assert_eq!(score.evidence[0].severity, Severity::Info);
    }

    #[test]
    fn test_new_account_and_young_domain_is_critical() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(3),
            domain_age: Some(2),
            ..Default::default()
        });
        assert!(score
            .evidence
            .iter()
            .any(|e| e.severity == Severity::Critical));
        assert_eq!(score.score, 70);
    }

    #[test]
    fn test_everything_bad_clamps_at_100() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(1),
            domain_age: Some(1),
            has_verified_links: Some(false),
            has_website: Some(false),
            ..Default::default()
        });
        assert_eq!(score.score, 100);
        assert_eq!(score.evidence.len(), 4);
    }

    #[test]
    fn test_verified_links_credit_never_goes_negative() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(900),
            has_verified_links: Some(true),
            has_website: Some(true),
            ..Default::default()
        });
        assert_eq!(score.score, 0);
    }

    #[test]
    fn test_evidence_links() {
        let score = calculate_identity_score(&IdentitySignals {
            x_account_age: Some(20),
            domain_age: Some(10),
            x_handle: Some("@ClArP".to_string()),
            website: Some("clarp.lol".to_string()),
            ..Default::default()
        });
        assert_eq!(score.evidence[0].url.as_deref(), Some("https://x.com/clarp"));
        assert_eq!(score.evidence[1].url.as_deref(), Some("https://clarp.lol"));
    }
}
