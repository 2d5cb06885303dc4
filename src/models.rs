// src/models.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scenario keys used in the crack-time display table.
pub mod scenario {
    pub const ONLINE_THROTTLING_100_PER_HOUR: &str = "online_throttling_100_per_hour";
    pub const ONLINE_NO_THROTTLING_10_PER_SECOND: &str = "online_no_throttling_10_per_second";
    pub const OFFLINE_SLOW_HASHING_1E4_PER_SECOND: &str = "offline_slow_hashing_1e4_per_second";
    pub const OFFLINE_FAST_HASHING_1E10_PER_SECOND: &str = "offline_fast_hashing_1e10_per_second";
}

/// Result of one strength evaluation. Fields the oracle did not report are
/// `None` ("unknown"), never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthResult {
    /// 0 (weakest) to 4 (strongest), on the oracle's own scale.
    pub score: u8,
    pub guesses: Option<f64>,
    pub calc_seconds: Option<f64>,
    /// Scenario key -> pre-formatted human string.
    pub crack_times: HashMap<String, String>,
    /// Weakness spans in left-to-right password order.
    pub spans: Vec<WeaknessSpan>,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
    /// Synthesized guidance message, ready for display.
    pub message: String,
}

impl StrengthResult {
    /// Canonical zero-value result for the empty-input fast path.
    pub fn empty_input(message: &str) -> Self {
        StrengthResult {
            score: 0,
            guesses: None,
            calc_seconds: None,
            crack_times: HashMap::new(),
            spans: Vec::new(),
            warning: None,
            suggestions: Vec::new(),
            message: message.to_string(),
        }
    }
}

/// A contiguous substring the oracle flagged as contributing to guessability.
///
/// `start` and `end` are inclusive character offsets into the password.
/// Spans may overlap; they are kept in the oracle's emitted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaknessSpan {
    pub start: usize,
    pub end: usize,
    pub kind: PatternKind,
    pub token: String,
    /// log10 of the sub-guess count attributable to this span, if known.
    pub guesses_log10: Option<f64>,
    #[serde(default)]
    pub detail: SpanDetail,
}

/// Classification of a weakness span. Open set: kinds this engine does not
/// know about are carried through as `Unknown` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternKind {
    Dictionary,
    Repeat,
    Sequence,
    Spatial,
    Date,
    Regex,
    Bruteforce,
    Unknown(String),
}

impl PatternKind {
    pub fn as_str(&self) -> &str {
        match self {
            PatternKind::Dictionary => "dictionary",
            PatternKind::Repeat => "repeat",
            PatternKind::Sequence => "sequence",
            PatternKind::Spatial => "spatial",
            PatternKind::Date => "date",
            PatternKind::Regex => "regex",
            PatternKind::Bruteforce => "bruteforce",
            PatternKind::Unknown(name) => name,
        }
    }

    /// Name with the first letter uppercased, for tooltips.
    pub fn capitalized(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for PatternKind {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dictionary" => PatternKind::Dictionary,
            "repeat" => PatternKind::Repeat,
            "sequence" => PatternKind::Sequence,
            "spatial" => PatternKind::Spatial,
            "date" => PatternKind::Date,
            "regex" => PatternKind::Regex,
            "bruteforce" => PatternKind::Bruteforce,
            _ => PatternKind::Unknown(name),
        }
    }
}

impl From<PatternKind> for String {
    fn from(kind: PatternKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Pattern-specific metadata. All optional; which fields are set depends on
/// the span kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    Passphrase,
    RandomSymbols,
}

// Password generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub strategy: GenerationStrategy,
    /// Minimum acceptable score, 0-4.
    pub min_score: u8,
    /// Attempt ceiling for the acceptance loop.
    pub max_attempts: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            strategy: GenerationStrategy::RandomSymbols,
            min_score: 4,
            max_attempts: 100,
        }
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceptual lightness test (ITU-R BT.601 luma, threshold 0.5). Used to
    /// pick a legible label color against this background.
    pub fn is_light(&self) -> bool {
        let luma = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        luma / 255.0 > 0.5
    }
}

/// One renderable segment of the weakness timeline. Geometry is exposed both
/// as fractions of the password and premultiplied by the viewport passed to
/// `timeline::layout`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSegment {
    pub x_fraction: f64,
    pub width_fraction: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub text_color: Rgb,
    pub label: String,
    pub tooltip: String,
}
