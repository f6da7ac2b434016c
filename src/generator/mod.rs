//! Password generation module - alphabet assembly and uniform drawing

mod batch;
mod password;

pub use batch::PasswordGenerator;
pub use password::{draw_password, draw_password_with_rng};

use crate::types::{ComplexityTier, GenerationConfig};

/// Lowercase letter block (always the base of the alphabet)
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letter block (dropped on easy complexity)
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digit block
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation characters. Used both as the fallback
/// special block and as the scorer's punctuation reference set.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Ordered character sequence passwords are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet for a generation config.
    ///
    /// Block order is fixed: lowercase, uppercase (skipped on easy),
    /// digits, then specials. Custom specials are taken verbatim when
    /// non-empty, otherwise the default punctuation block is used.
    pub fn for_config(config: &GenerationConfig) -> Self {
        let mut chars: Vec<char> = LOWERCASE.chars().collect();

        if config.complexity != ComplexityTier::Easy {
            chars.extend(UPPERCASE.chars());
        }

        if config.include_digits {
            chars.extend(DIGITS.chars());
        }

        if config.include_special {
            match config.custom_special_chars.as_deref() {
                Some(custom) if !custom.is_empty() => chars.extend(custom.chars()),
                _ => chars.extend(DEFAULT_PUNCTUATION.chars()),
            }
        }

        Self { chars }
    }

    /// Build directly from a character sequence (order preserved).
    /// An empty sequence is a valid, representable alphabet.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}
