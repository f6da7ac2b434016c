//! Password strength assessment module

mod scorer;

pub use scorer::{evaluate, score_strength, StrengthReport, MIN_STRONG_LENGTH};
