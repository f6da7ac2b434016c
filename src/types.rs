//! Core types and structures for pass-forge

use crate::error::{PassForgeError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Alphabet complexity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Easy,
    Medium,
    Hard,
}

impl ComplexityTier {
    /// All tiers in menu order
    pub fn all() -> Vec<ComplexityTier> {
        vec![
            ComplexityTier::Easy,
            ComplexityTier::Medium,
            ComplexityTier::Hard,
        ]
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplexityTier::Easy => write!(f, "easy"),
            ComplexityTier::Medium => write!(f, "medium"),
            ComplexityTier::Hard => write!(f, "hard"),
        }
    }
}

impl Default for ComplexityTier {
    fn default() -> Self {
        ComplexityTier::Medium
    }
}

/// Heuristic password strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "weak"),
            StrengthTier::Medium => write!(f, "medium"),
            StrengthTier::Strong => write!(f, "strong"),
        }
    }
}

/// Configuration for password generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_special: bool,
    pub custom_special_chars: Option<String>,
    pub complexity: ComplexityTier,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_digits: false,
            include_special: false,
            custom_special_chars: None,
            complexity: ComplexityTier::Medium,
        }
    }
}

impl GenerationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_length()?;
        self.validate_custom_specials()?;
        Ok(())
    }

    fn validate_length(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PassForgeError::validation(
                "Password length must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_custom_specials(&self) -> Result<()> {
        match &self.custom_special_chars {
            Some(custom) => Self::validate_special_chars(custom),
            None => Ok(()),
        }
    }

    /// Check a candidate custom special set, so prompts can reject bad
    /// input before it reaches generation. Must be printable ASCII with
    /// no whitespace; a newline inside a password would corrupt the
    /// plain-text export. An empty string is allowed and falls back to
    /// the default set.
    pub fn validate_special_chars(custom: &str) -> Result<()> {
        if custom.is_empty() {
            return Ok(());
        }

        let printable = Regex::new(r"^[\x21-\x7e]+$")
            .map_err(|e| PassForgeError::internal(e.to_string()))?;

        if !printable.is_match(custom) {
            return Err(PassForgeError::validation(
                "Custom special characters must be printable ASCII without whitespace",
            ));
        }

        Ok(())
    }
}

/// Performance metrics for password generation (thread-safe)
#[derive(Debug, Default)]
pub struct GeneratorMetrics {
    batches_generated: AtomicU64,
    passwords_generated: AtomicU64,
    empty_alphabet_rejections: AtomicU64,
    generation_time_ms: AtomicU64,
}

impl GeneratorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_batches(&self) {
        self.batches_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_passwords(&self, count: u64) {
        self.passwords_generated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn increment_empty_alphabet(&self) {
        self.empty_alphabet_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_generation_time(&self, elapsed_ms: u64) {
        self.generation_time_ms.fetch_add(elapsed_ms, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            batches_generated: self.batches_generated.load(Ordering::Relaxed),
            passwords_generated: self.passwords_generated.load(Ordering::Relaxed),
            empty_alphabet_rejections: self.empty_alphabet_rejections.load(Ordering::Relaxed),
            generation_time_ms: self.generation_time_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the generation counters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub batches_generated: u64,
    pub passwords_generated: u64,
    pub empty_alphabet_rejections: u64,
    pub generation_time_ms: u64,
}

impl MetricsSnapshot {
    pub fn avg_batch_time_ms(&self) -> f64 {
        if self.batches_generated == 0 {
            0.0
        } else {
            self.generation_time_ms as f64 / self.batches_generated as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 12);
        assert_eq!(config.complexity, ComplexityTier::Medium);
        assert!(!config.include_digits);
        assert!(!config.include_special);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = GenerationConfig {
            length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_custom_specials_validation() {
        let mut config = GenerationConfig {
            include_special: true,
            custom_special_chars: Some("!@#$%^&*".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        // Empty falls back to the default set, so it passes validation
        config.custom_special_chars = Some(String::new());
        assert!(config.validate().is_ok());

        config.custom_special_chars = Some("ab\ncd".to_string());
        assert!(config.validate().is_err());

        config.custom_special_chars = Some("with space".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_special_chars_candidate_check() {
        assert!(GenerationConfig::validate_special_chars("!@#$%^&*").is_ok());
        assert!(GenerationConfig::validate_special_chars("").is_ok());
        assert!(GenerationConfig::validate_special_chars("a b").is_err());
        assert!(GenerationConfig::validate_special_chars("ab\n").is_err());
        assert!(GenerationConfig::validate_special_chars("héç").is_err());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(ComplexityTier::Easy.to_string(), "easy");
        assert_eq!(ComplexityTier::default(), ComplexityTier::Medium);
        assert_eq!(StrengthTier::Strong.to_string(), "strong");
    }

    #[test]
    fn test_metrics_snapshot() {
        let metrics = GeneratorMetrics::new();
        metrics.increment_batches();
        metrics.increment_batches();
        metrics.add_passwords(7);
        metrics.add_generation_time(10);

        let stats = metrics.get_stats();
        assert_eq!(stats.batches_generated, 2);
        assert_eq!(stats.passwords_generated, 7);
        assert_eq!(stats.empty_alphabet_rejections, 0);
        assert!((stats.avg_batch_time_ms() - 5.0).abs() < f64::EPSILON);
    }
}
