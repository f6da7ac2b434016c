//! Batch password generation

use super::{draw_password_with_rng, Alphabet};
use crate::error::{PassForgeError, Result};
use crate::session::{GeneratedPassword, PasswordBatch};
use crate::strength;
use crate::types::{GenerationConfig, GeneratorMetrics, MetricsSnapshot};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Password generator with thread-safe default configuration and
/// performance metrics
#[derive(Clone)]
pub struct PasswordGenerator {
    default_config: Arc<RwLock<GenerationConfig>>,
    metrics: Arc<GeneratorMetrics>,
}

impl PasswordGenerator {
    /// Create a new password generator
    pub fn new() -> Self {
        Self {
            default_config: Arc::new(RwLock::new(GenerationConfig::default())),
            metrics: Arc::new(GeneratorMetrics::new()),
        }
    }

    /// Create a generator seeded with a default configuration
    pub fn with_config(config: GenerationConfig) -> Self {
        let generator = Self::new();
        generator.set_default_config(config);
        generator
    }

    /// Replace the default configuration (thread-safe)
    pub fn set_default_config(&self, config: GenerationConfig) {
        let mut default = self.default_config.write();
        *default = config;
    }

    /// Get a copy of the default configuration (thread-safe)
    pub fn default_config(&self) -> GenerationConfig {
        self.default_config.read().clone()
    }

    /// Generate a single password with the default configuration
    pub fn generate(&self) -> Result<String> {
        let config = self.default_config.read().clone();
        let batch = self.generate_batch(&config, 1)?;
        batch
            .passwords
            .into_iter()
            .next()
            .map(|p| p.value)
            .ok_or_else(|| PassForgeError::internal("Generated batch was empty"))
    }

    /// Generate a batch of passwords, each annotated with its strength tier
    pub fn generate_batch(&self, config: &GenerationConfig, count: usize) -> Result<PasswordBatch> {
        let start_time = Instant::now();

        config.validate()?;

        if count == 0 {
            return Err(PassForgeError::validation("Batch count must be at least 1"));
        }

        // Emptiness is a property of the alphabet, so one check covers
        // the whole batch.
        let alphabet = Alphabet::for_config(config);
        if alphabet.is_empty() {
            self.metrics.increment_empty_alphabet();
            tracing::warn!(
                complexity = %config.complexity,
                include_digits = config.include_digits,
                include_special = config.include_special,
                "Rejected generation against an empty alphabet"
            );
            return Err(PassForgeError::EmptyAlphabet);
        }

        let mut rng = rand::thread_rng();
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            let value = draw_password_with_rng(config, &alphabet, &mut rng)?;
            let tier = strength::evaluate(&value).tier();
            passwords.push(GeneratedPassword { value, tier });
        }

        let batch = PasswordBatch::new(config.clone(), passwords);

        let elapsed = start_time.elapsed();
        self.metrics.increment_batches();
        self.metrics.add_passwords(count as u64);
        self.metrics.add_generation_time(elapsed.as_millis() as u64);

        tracing::info!(
            batch_id = %batch.batch_id,
            count = %count,
            length = %config.length,
            alphabet_size = %alphabet.len(),
            duration_ms = %elapsed.as_millis(),
            "Password batch generated"
        );

        Ok(batch)
    }

    /// Get performance metrics
    pub fn get_metrics(&self) -> Arc<GeneratorMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
