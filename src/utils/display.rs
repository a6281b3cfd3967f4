//! Display mapping functions shared by the API and the CLI.
//! Band edges must stay in sync with the web dashboard.

use crate::models::types::{Confidence, RiskLevel, Severity};
use crate::utils::constants::{
    COLOR_BLUE, COLOR_DARK_RED, COLOR_GREEN, COLOR_ORANGE, COLOR_RED, COLOR_YELLOW,
    SCORE_BAND_CONFIRMED, SCORE_BAND_PROBABLY_FINE, SCORE_BAND_SUSPICIOUS,
    SCORE_BAND_YELLOW_FLAGS,
};

pub use crate::core::larp_score::get_risk_level;

/// Color code for a 0-100 score
pub fn get_score_color(score: u8) -> &'static str {
    if score >= SCORE_BAND_CONFIRMED {
        COLOR_DARK_RED
    } else if score >= SCORE_BAND_SUSPICIOUS {
        COLOR_RED
    } else if score >= SCORE_BAND_YELLOW_FLAGS {
        COLOR_ORANGE
    } else if score >= SCORE_BAND_PROBABLY_FINE {
        COLOR_YELLOW
    } else {
        COLOR_GREEN
    }
}

pub fn get_score_label(score: u8) -> &'static str {
    if score >= SCORE_BAND_CONFIRMED {
        "Confirmed LARP"
    } else if score >= SCORE_BAND_SUSPICIOUS {
        "Highly Suspicious"
    } else if score >= SCORE_BAND_YELLOW_FLAGS {
        "Yellow Flags"
    } else if score >= SCORE_BAND_PROBABLY_FINE {
        "Probably Fine"
    } else {
        "Appears Legitimate"
    }
}

pub fn get_risk_level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => COLOR_GREEN,
        RiskLevel::Medium => COLOR_YELLOW,
        RiskLevel::High => COLOR_ORANGE,
        RiskLevel::Critical => COLOR_RED,
    }
}

pub fn get_confidence_label(confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::Low => "Low Confidence",
        Confidence::Medium => "Medium Confidence",
        Confidence::High => "High Confidence",
    }
}

pub fn get_severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => COLOR_BLUE,
        Severity::Warning => COLOR_YELLOW,
        Severity::Critical => COLOR_RED,
    }
}
