//! Uniform password drawing

use super::Alphabet;
use crate::error::{PassForgeError, Result};
use crate::types::GenerationConfig;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Draw a single password using the thread-local RNG.
///
/// The thread-local RNG is a general-purpose PRNG. Callers that need
/// secret-grade output should pass an OS-backed RNG to
/// [`draw_password_with_rng`] instead.
pub fn draw_password(config: &GenerationConfig, alphabet: &Alphabet) -> Result<String> {
    draw_password_with_rng(config, alphabet, &mut rand::thread_rng())
}

/// Draw a single password with a caller-supplied RNG.
///
/// Each character is an independent uniform draw with replacement, so a
/// seeded RNG makes the output reproducible.
pub fn draw_password_with_rng<R: Rng + ?Sized>(
    config: &GenerationConfig,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String> {
    if alphabet.is_empty() {
        return Err(PassForgeError::EmptyAlphabet);
    }

    let chars = alphabet.chars();
    let dist = Uniform::from(0..chars.len());

    Ok((0..config.length).map(|_| chars[dist.sample(rng)]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_respects_length() {
        let config = GenerationConfig {
            length: 16,
            include_digits: true,
            ..Default::default()
        };
        let alphabet = Alphabet::for_config(&config);
        let password = draw_password(&config, &alphabet).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_drawn_chars_are_alphabet_members() {
        let config = GenerationConfig {
            length: 64,
            include_digits: true,
            include_special: true,
            ..Default::default()
        };
        let alphabet = Alphabet::for_config(&config);
        let password = draw_password(&config, &alphabet).unwrap();
        assert!(password.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GenerationConfig {
            length: 24,
            include_digits: true,
            ..Default::default()
        };
        let alphabet = Alphabet::for_config(&config);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = draw_password_with_rng(&config, &alphabet, &mut first_rng).unwrap();
        let second = draw_password_with_rng(&config, &alphabet, &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let config = GenerationConfig::default();
        let alphabet = Alphabet::from_chars("");
        let result = draw_password(&config, &alphabet);
        assert!(matches!(result, Err(PassForgeError::EmptyAlphabet)));
    }

    #[test]
    fn test_single_char_alphabet() {
        let config = GenerationConfig {
            length: 8,
            ..Default::default()
        };
        let alphabet = Alphabet::from_chars("x");
        let password = draw_password(&config, &alphabet).unwrap();
        assert_eq!(password, "xxxxxxxx");
    }
}
