// src/generators/wordlist.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_WORDLIST_PATH: &str = "/usr/share/dict/words";

const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 8;

// Built-in pool used when the system word source is missing or unusable.
const FALLBACK_WORDS: [&str; 10] = [
    "apple", "green", "flame", "lucky", "monkey", "river", "stone", "guitar", "storm", "rabbit",
];

/// Deduplicated pool of lowercase alphabetic words (3-8 chars) for the
/// passphrase strategy. Loaded once and reused across candidates.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn load_default() -> Self {
        Self::load(Path::new(DEFAULT_WORDLIST_PATH))
    }

    /// Read a newline-delimited word file. An unreadable source or one that
    /// yields no eligible words degrades to the built-in fallback pool.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!(
                    "word source {} unavailable ({}), using built-in fallback pool",
                    path.display(),
                    err
                );
                return Self::fallback();
            }
        };

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for line in text.lines() {
            let word = line.trim();
            if !eligible(word) {
                continue;
            }
            let word = word.to_ascii_lowercase();
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            log::warn!(
                "word source {} contained no usable words, using built-in fallback pool",
                path.display()
            );
            return Self::fallback();
        }
        WordPool { words }
    }

    pub fn fallback() -> Self {
        WordPool {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn eligible(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_alphabetic())
}
