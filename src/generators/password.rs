// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::CryptoRng;
use thiserror::Error;

use super::wordlist::WordPool;
use crate::models::{GenerationRequest, GenerationStrategy};
use crate::oracle::{StrengthOracle, ZxcvbnOracle};

/// Alphabet for the random-symbols strategy.
const SYMBOL_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-_=+[]{}";

/// Passphrase candidates are filled up to this many characters.
pub const PASSPHRASE_TARGET_LEN: usize = 20;

/// Length of a random-symbols candidate.
pub const SYMBOL_PASSWORD_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The attempt ceiling ran out before any candidate met the threshold.
    /// Recoverable: retry with a lower score, a higher ceiling, or the other
    /// strategy.
    #[error("could not generate a password scoring >= {min_score} in {attempts} attempts")]
    Exhausted { min_score: u8, attempts: u32 },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Mints passwords by rejection sampling: build a candidate, score it against
/// the oracle, accept the first one at or above the requested score.
///
/// Every random draw that reaches the output comes from the OS CSPRNG; a
/// seedable general-purpose generator would make the output predictable.
pub struct PasswordGenerator<O: StrengthOracle> {
    oracle: O,
    words: WordPool,
}

impl PasswordGenerator<ZxcvbnOracle> {
    pub fn new() -> Self {
        Self::with_oracle(ZxcvbnOracle)
    }
}

impl Default for PasswordGenerator<ZxcvbnOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: StrengthOracle> PasswordGenerator<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Self::with_word_pool(oracle, WordPool::load_default())
    }

    pub fn with_word_pool(oracle: O, words: WordPool) -> Self {
        PasswordGenerator { oracle, words }
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<String> {
        for attempt in 0..request.max_attempts {
            let candidate = match request.strategy {
                GenerationStrategy::Passphrase => self.passphrase_candidate(&mut OsRng),
                GenerationStrategy::RandomSymbols => symbol_candidate(&mut OsRng),
            };
            let raw = self.oracle.score(&candidate);
            if raw.score >= request.min_score {
                return Ok(candidate);
            }
            log::debug!(
                "candidate scored {} < {}, retrying (attempt {})",
                raw.score,
                request.min_score,
                attempt + 1
            );
        }
        Err(GeneratorError::Exhausted {
            min_score: request.min_score,
            attempts: request.max_attempts,
        })
    }

    /// Greedy bin-fill over a shuffled copy of the word pool: a capitalized
    /// word is appended only if it keeps the running length at or under the
    /// target. Overflowing words are skipped, not a stop condition, so later
    /// shorter words can still fill the remaining room.
    fn passphrase_candidate<R: Rng + CryptoRng>(&self, rng: &mut R) -> String {
        let mut pool: Vec<&str> = self.words.words().iter().map(String::as_str).collect();
        pool.shuffle(rng);

        let mut phrase = String::new();
        for word in pool {
            if phrase.len() + word.len() > PASSPHRASE_TARGET_LEN {
                continue;
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                phrase.extend(first.to_uppercase());
                phrase.push_str(chars.as_str());
            }
        }
        phrase
    }
}

/// Fixed-length candidate with every character drawn independently and
/// uniformly from the symbol alphabet.
fn symbol_candidate<R: Rng + CryptoRng>(rng: &mut R) -> String {
    (0..SYMBOL_PASSWORD_LEN)
        .map(|_| SYMBOL_ALPHABET[rng.gen_range(0..SYMBOL_ALPHABET.len())] as char)
        .collect()
}
