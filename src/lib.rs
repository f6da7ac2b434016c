//! Pass Forge - configurable password generation and strength assessment
//!
//! A simple and elegant CLI tool for generating batches of passwords and
//! scoring their strength.
//!
//! Passwords are drawn with a general-purpose PRNG (`rand::thread_rng`).
//! That matches interactive use; callers with secret-grade requirements
//! should inject an OS-backed RNG through
//! [`generator::draw_password_with_rng`].

pub mod error;
pub mod expiry;
pub mod generator;
pub mod session;
pub mod strength;
pub mod types;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use types::{ComplexityTier, GenerationConfig, GeneratorMetrics, MetricsSnapshot, StrengthTier};

// Re-export main functionality
pub use expiry::{ExpiryOutcome, ExpiryTimer};
pub use generator::{draw_password, draw_password_with_rng, Alphabet, PasswordGenerator};
pub use session::{GeneratedPassword, PasswordBatch};
pub use strength::{evaluate, score_strength, StrengthReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
