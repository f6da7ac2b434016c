//! Generated batch records and export

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PassForgeError, Result};
use crate::types::{GenerationConfig, StrengthTier};

/// A generated password with its strength annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub value: String,
    pub tier: StrengthTier,
}

/// A batch of generated passwords with its configuration and lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordBatch {
    /// Batch identifier
    pub batch_id: String,
    /// Configuration the batch was generated with
    pub config: GenerationConfig,
    /// Generated passwords in draw order
    pub passwords: Vec<GeneratedPassword>,
    /// Generation time
    pub generated_at: DateTime<Utc>,
    /// Expiration time, when a lifetime was set
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PasswordBatch {
    /// Create a new batch record
    pub fn new(config: GenerationConfig, passwords: Vec<GeneratedPassword>) -> Self {
        let now = Utc::now();
        Self {
            batch_id: format!("pass_{}_{}", config.length, now.format("%Y%m%d_%H%M%S")),
            config,
            passwords,
            generated_at: now,
            expires_at: None,
        }
    }

    /// Set an expiration lifetime counted from the generation time.
    /// Out-of-range lifetimes saturate to the maximum timestamp.
    pub fn with_lifetime(mut self, lifetime: std::time::Duration) -> Self {
        let expires = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| self.generated_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.expires_at = Some(expires);
        self
    }

    /// Whether a lifetime was set and has passed
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Utc::now() >= expires,
            None => false,
        }
    }

    /// Time left before expiry. None when no lifetime was set or the
    /// batch has already expired.
    pub fn remaining_lifetime(&self) -> Option<std::time::Duration> {
        let expires = self.expires_at?;
        (expires - Utc::now()).to_std().ok()
    }

    /// Count passwords with the given strength tier
    pub fn tier_count(&self, tier: StrengthTier) -> usize {
        self.passwords.iter().filter(|p| p.tier == tier).count()
    }

    /// Newline-joined password values (the plain-text export payload)
    pub fn plain_text(&self) -> String {
        self.passwords
            .iter()
            .map(|p| p.value.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the plain-text export
    pub fn write_plain_text(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        std::fs::write(path, self.plain_text()).map_err(|e| {
            PassForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Load a batch record from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PassForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| PassForgeError::parse(e.to_string(), Some(content)))
    }

    /// Save the full batch record as JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            PassForgeError::internal(format!("Failed to serialize batch: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            PassForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Default plain-text export path, honoring the PASS_FORGE_OUTPUT
    /// environment override
    pub fn default_export_path() -> PathBuf {
        match std::env::var("PASS_FORGE_OUTPUT") {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => PathBuf::from("output/passwords.txt"),
        }
    }
}

/// Create the parent directory when the path names one
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PassForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_batch(values: &[&str]) -> PasswordBatch {
        let passwords = values
            .iter()
            .map(|v| GeneratedPassword {
                value: v.to_string(),
                tier: StrengthTier::Weak,
            })
            .collect();
        PasswordBatch::new(GenerationConfig::default(), passwords)
    }

    #[test]
    fn test_batch_id_includes_length() {
        let batch = sample_batch(&["one"]);
        assert!(batch.batch_id.starts_with("pass_12_"));
        assert!(batch.expires_at.is_none());
        assert!(!batch.is_expired());
    }

    #[test]
    fn test_plain_text_is_newline_joined() {
        let batch = sample_batch(&["first", "second", "third"]);
        assert_eq!(batch.plain_text(), "first\nsecond\nthird");
    }

    #[test]
    fn test_lifetime_and_expiry() {
        let fresh = sample_batch(&["pw"]).with_lifetime(Duration::from_secs(300));
        assert!(!fresh.is_expired());
        assert!(fresh.remaining_lifetime().is_some());

        let mut stale = sample_batch(&["pw"]);
        stale.expires_at = Some(stale.generated_at - chrono::Duration::seconds(1));
        assert!(stale.is_expired());
        assert!(stale.remaining_lifetime().is_none());
    }

    #[test]
    fn test_tier_count() {
        let mut batch = sample_batch(&["a", "b", "c"]);
        batch.passwords[0].tier = StrengthTier::Strong;
        assert_eq!(batch.tier_count(StrengthTier::Strong), 1);
        assert_eq!(batch.tier_count(StrengthTier::Weak), 2);
        assert_eq!(batch.tier_count(StrengthTier::Medium), 0);
    }

    #[test]
    fn test_plain_text_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exports").join("passwords.txt");

        let batch = sample_batch(&["alpha", "beta"]);
        batch.write_plain_text(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "alpha\nbeta");
    }

    #[test]
    fn test_record_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");

        let batch = sample_batch(&["alpha", "beta"]).with_lifetime(Duration::from_secs(60));
        batch.save(&path).unwrap();

        let loaded = PasswordBatch::load(&path).unwrap();
        assert_eq!(loaded.batch_id, batch.batch_id);
        assert_eq!(loaded.passwords.len(), 2);
        assert_eq!(loaded.passwords[0].value, "alpha");
        assert_eq!(loaded.expires_at, batch.expires_at);
    }

    #[test]
    fn test_default_export_path_env_override() {
        // The only test that touches PASS_FORGE_OUTPUT
        std::env::remove_var("PASS_FORGE_OUTPUT");
        assert_eq!(
            PasswordBatch::default_export_path(),
            PathBuf::from("output/passwords.txt")
        );

        std::env::set_var("PASS_FORGE_OUTPUT", "custom/location.txt");
        assert_eq!(
            PasswordBatch::default_export_path(),
            PathBuf::from("custom/location.txt")
        );

        // Empty override falls back to the default
        std::env::set_var("PASS_FORGE_OUTPUT", "");
        assert_eq!(
            PasswordBatch::default_export_path(),
            PathBuf::from("output/passwords.txt")
        );

        std::env::remove_var("PASS_FORGE_OUTPUT");
    }

    #[test]
    fn test_load_rejects_bad_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(PasswordBatch::load(&path).is_err());
    }
}
