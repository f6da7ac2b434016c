//! Heuristic password strength scoring
//!
//! Four independent checks, one point each: a digit, mixed case,
//! a punctuation character, and a minimum length. The punctuation
//! check always uses the default punctuation set, regardless of any
//! custom specials the password was generated with.

use crate::generator::DEFAULT_PUNCTUATION;
use crate::types::StrengthTier;
use serde::{Deserialize, Serialize};

/// Minimum character count for the length check
pub const MIN_STRONG_LENGTH: usize = 12;

/// Result of the four strength checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub has_digit: bool,
    pub has_mixed_case: bool,
    pub has_punctuation: bool,
    pub meets_length: bool,
}

impl StrengthReport {
    /// Number of satisfied checks (0-4)
    pub fn score(&self) -> u8 {
        [
            self.has_digit,
            self.has_mixed_case,
            self.has_punctuation,
            self.meets_length,
        ]
        .iter()
        .filter(|&&check| check)
        .count() as u8
    }

    /// Map the score to a tier: 4 is strong, 3 is medium, below is weak
    pub fn tier(&self) -> StrengthTier {
        match self.score() {
            4 => StrengthTier::Strong,
            3 => StrengthTier::Medium,
            _ => StrengthTier::Weak,
        }
    }

    /// Improvement hints for the checks that failed
    pub fn missing_criteria(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if !self.has_digit {
            hints.push("add a digit");
        }
        if !self.has_mixed_case {
            hints.push("mix uppercase and lowercase letters");
        }
        if !self.has_punctuation {
            hints.push("add a punctuation character");
        }
        if !self.meets_length {
            hints.push("use at least 12 characters");
        }
        hints
    }
}

/// Run the four strength checks against a password
pub fn evaluate(password: &str) -> StrengthReport {
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_mixed_case = password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase());
    let has_punctuation = password.chars().any(|c| DEFAULT_PUNCTUATION.contains(c));
    let meets_length = password.chars().count() >= MIN_STRONG_LENGTH;

    StrengthReport {
        has_digit,
        has_mixed_case,
        has_punctuation,
        meets_length,
    }
}

/// Evaluate and map straight to a tier
pub fn score_strength(password: &str) -> StrengthTier {
    evaluate(password).tier()
}
