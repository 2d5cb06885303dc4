// src/analyzer.rs
use thiserror::Error;

use crate::feedback;
use crate::models::{PatternKind, SpanDetail, StrengthResult, WeaknessSpan};
use crate::oracle::{RawSpan, StrengthOracle, ZxcvbnOracle};

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The oracle returned a structurally malformed result. This fails loudly
    /// instead of coercing, since a silently "fixed" score would corrupt
    /// every downstream strength judgment.
    #[error("oracle contract violation: {0}")]
    ContractViolation(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Adapter around the scoring oracle. Normalizes one raw oracle result into a
/// `StrengthResult` per call; no retries, no caching, no shared state.
pub struct Analyzer<O: StrengthOracle> {
    oracle: O,
}

impl Analyzer<ZxcvbnOracle> {
    pub fn new() -> Self {
        Self::with_oracle(ZxcvbnOracle)
    }
}

impl Default for Analyzer<ZxcvbnOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: StrengthOracle> Analyzer<O> {
    pub fn with_oracle(oracle: O) -> Self {
        Analyzer { oracle }
    }

    /// Evaluate one password. The empty string short-circuits to the
    /// canonical zero result without touching the oracle.
    pub fn evaluate(&self, password: &str) -> Result<StrengthResult> {
        if password.is_empty() {
            return Ok(StrengthResult::empty_input(feedback::EMPTY_INPUT_MESSAGE));
        }

        let raw = self.oracle.score(password);
        if raw.score > 4 {
            return Err(AnalyzerError::ContractViolation(format!(
                "score {} outside the 0-4 scale",
                raw.score
            )));
        }

        let length = password.chars().count();
        let mut spans = Vec::with_capacity(raw.sequence.len());
        for raw_span in raw.sequence {
            spans.push(adapt_span(raw_span, length)?);
        }

        let message = feedback::synthesize(raw.feedback.warning.as_deref(), &raw.feedback.suggestions);

        Ok(StrengthResult {
            score: raw.score,
            guesses: raw.guesses,
            calc_seconds: raw.calc_time,
            crack_times: raw.crack_times_display,
            spans,
            warning: raw.feedback.warning,
            suggestions: raw.feedback.suggestions,
            message,
        })
    }
}

fn adapt_span(raw: RawSpan, password_length: usize) -> Result<WeaknessSpan> {
    if raw.i > raw.j || raw.j >= password_length {
        return Err(AnalyzerError::ContractViolation(format!(
            "span {}..={} out of bounds for a {}-char password",
            raw.i, raw.j, password_length
        )));
    }
    Ok(WeaknessSpan {
        start: raw.i,
        end: raw.j,
        kind: PatternKind::from(raw.pattern),
        token: raw.token,
        guesses_log10: raw.guesses_log10,
        detail: SpanDetail {
            dictionary_name: raw.dictionary_name,
            sequence_name: raw.sequence_name,
            repeat_count: raw.repeat_count,
            graph: raw.graph,
            separator: raw.separator,
            year: raw.year,
        },
    })
}
