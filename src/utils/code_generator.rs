//! Short code generation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet. The
//! [`CodeGenerator`] trait lets the allocation service take its random source
//! as a dependency, so tests can substitute a seeded or scripted source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Symbols a short code is drawn from: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a code of exactly `length` characters from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Generates a random short code of `length` characters.
///
/// Uses the thread-local CSPRNG, each character sampled independently and
/// uniformly from [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use url_shortener::utils::code_generator::{ALPHABET, generate_code};
///
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate_code(length: usize) -> String {
    sample_code(&mut rand::rng(), length)
}

fn sample_code<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

/// Code generator backed by the thread-local random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}

/// Deterministic code generator for reproducible runs.
///
/// Two generators built from the same seed produce the same sequence.
#[derive(Debug)]
pub struct SeededCodeGenerator {
    rng: Mutex<StdRng>,
}

impl SeededCodeGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl CodeGenerator for SeededCodeGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        sample_code(&mut *rng, length)
    }
}
