// src/oracle.rs
//
// The strength-scoring oracle is a black box to the rest of the engine. It is
// consumed through the `StrengthOracle` trait and hands back a `RawAnalysis`
// record with named optional fields, so the contract can grow new fields
// without breaking callers (the historical shape went through several tuple
// arities; nothing here reads by position).
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::scenario;

/// External password-strength estimator.
pub trait StrengthOracle {
    fn score(&self, password: &str) -> RawAnalysis;
}

/// Raw oracle output, before adapter normalization. Every optional field
/// defaults when absent; a JSON-speaking oracle may omit any subset of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnalysis {
    pub score: u8,
    pub guesses: Option<f64>,
    /// Seconds the oracle spent on the analysis, if it reported them.
    pub calc_time: Option<f64>,
    pub crack_times_display: HashMap<String, String>,
    pub feedback: RawFeedback,
    pub sequence: Vec<RawSpan>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// One matched weakness span as the oracle reports it: inclusive character
/// offsets `i..=j`, a lowercase pattern name, and pattern-specific metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSpan {
    pub i: usize,
    pub j: usize,
    pub pattern: String,
    pub token: String,
    pub guesses_log10: Option<f64>,
    pub dictionary_name: Option<String>,
    pub sequence_name: Option<String>,
    pub repeat_count: Option<usize>,
    pub graph: Option<String>,
    pub separator: Option<String>,
    pub year: Option<i32>,
}

/// Default oracle, backed by the `zxcvbn` estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnOracle;

impl StrengthOracle for ZxcvbnOracle {
    fn score(&self, password: &str) -> RawAnalysis {
        let entropy = zxcvbn::zxcvbn(password, &[]);
        let crack = entropy.crack_times();

        let mut crack_times_display = HashMap::new();
        crack_times_display.insert(
            scenario::ONLINE_THROTTLING_100_PER_HOUR.to_string(),
            crack.online_throttling_100_per_hour().to_string(),
        );
        crack_times_display.insert(
            scenario::ONLINE_NO_THROTTLING_10_PER_SECOND.to_string(),
            crack.online_no_throttling_10_per_second().to_string(),
        );
        crack_times_display.insert(
            scenario::OFFLINE_SLOW_HASHING_1E4_PER_SECOND.to_string(),
            crack.offline_slow_hashing_1e4_per_second().to_string(),
        );
        crack_times_display.insert(
            scenario::OFFLINE_FAST_HASHING_1E10_PER_SECOND.to_string(),
            crack.offline_fast_hashing_1e10_per_second().to_string(),
        );

        let feedback = entropy
            .feedback()
            .map(|feedback| RawFeedback {
                warning: feedback.warning().map(|w| w.to_string()),
                suggestions: feedback.suggestions().iter().map(|s| s.to_string()).collect(),
            })
            .unwrap_or_default();

        RawAnalysis {
            score: u8::from(entropy.score()),
            guesses: Some(entropy.guesses() as f64),
            calc_time: Some(entropy.calculation_time().as_secs_f64()),
            crack_times_display,
            feedback,
            sequence: entropy.sequence().iter().map(raw_span).collect(),
        }
    }
}

fn raw_span(m: &zxcvbn::Match) -> RawSpan {
    use zxcvbn::matching::patterns::MatchPattern;

    let mut span = RawSpan {
        i: m.i,
        j: m.j,
        token: m.token.clone(),
        guesses_log10: m.guesses.map(|g| (g as f64).log10()),
        ..RawSpan::default()
    };
    match &m.pattern {
        MatchPattern::Dictionary(d) => {
            span.pattern = "dictionary".to_string();
            span.dictionary_name = Some(format!("{:?}", d.dictionary_name).to_lowercase());
        }
        MatchPattern::Spatial(s) => {
            span.pattern = "spatial".to_string();
            span.graph = Some(s.graph.clone());
        }
        MatchPattern::Repeat(r) => {
            span.pattern = "repeat".to_string();
            span.repeat_count = Some(r.repeat_count);
        }
        MatchPattern::Sequence(s) => {
            span.pattern = "sequence".to_string();
            span.sequence_name = Some(s.sequence_name.to_string());
        }
        MatchPattern::Regex(_) => {
            span.pattern = "regex".to_string();
        }
        MatchPattern::Date(d) => {
            span.pattern = "date".to_string();
            span.separator = Some(d.separator.clone());
            span.year = Some(d.year);
        }
        MatchPattern::BruteForce => {
            span.pattern = "bruteforce".to_string();
        }
    }
    span
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Oracle that replays a fixed raw record, for deterministic tests.
    pub struct FixedOracle {
        pub raw: RawAnalysis,
    }

    impl FixedOracle {
        pub fn with_score(score: u8) -> Self {
            FixedOracle {
                raw: RawAnalysis {
                    score,
                    ..RawAnalysis::default()
                },
            }
        }
    }

    impl StrengthOracle for FixedOracle {
        fn score(&self, _password: &str) -> RawAnalysis {
            self.raw.clone()
        }
    }
}
