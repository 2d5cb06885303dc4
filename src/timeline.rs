// src/timeline.rs
//
// Maps weakness spans onto a proportional visual timeline. The engine only
// computes geometry, colors and text; painting belongs to the GUI layer.
use std::f64::consts::LOG2_10;

use crate::models::{PatternKind, Rgb, TimelineSegment, WeaknessSpan};

// Fixed palette, one family per pattern kind.
pub const DICTIONARY_COLOR: Rgb = Rgb::new(0xe7, 0x4c, 0x3c);
pub const REPEAT_COLOR: Rgb = Rgb::new(0xf1, 0xc4, 0x0f);
pub const SEQUENCE_COLOR: Rgb = Rgb::new(0x2e, 0xcc, 0x71);
pub const SPATIAL_COLOR: Rgb = Rgb::new(0x34, 0x98, 0xdb);
pub const DATE_COLOR: Rgb = Rgb::new(0x9b, 0x59, 0xb6);
pub const REGEX_COLOR: Rgb = Rgb::new(0x1a, 0xbc, 0x9c);
pub const BRUTEFORCE_COLOR: Rgb = Rgb::new(0x7f, 0x8c, 0x8d);
pub const DEFAULT_COLOR: Rgb = Rgb::new(0xbd, 0xc3, 0xc7);

const DARK_TEXT: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
const LIGHT_TEXT: Rgb = Rgb::new(0xec, 0xf0, 0xf1);

/// Total mapping: unrecognized kinds get the neutral default, never an error.
pub fn color_for(kind: &PatternKind) -> Rgb {
    match kind {
        PatternKind::Dictionary => DICTIONARY_COLOR,
        PatternKind::Repeat => REPEAT_COLOR,
        PatternKind::Sequence => SEQUENCE_COLOR,
        PatternKind::Spatial => SPATIAL_COLOR,
        PatternKind::Date => DATE_COLOR,
        PatternKind::Regex => REGEX_COLOR,
        PatternKind::Bruteforce => BRUTEFORCE_COLOR,
        PatternKind::Unknown(_) => DEFAULT_COLOR,
    }
}

/// Label color with enough contrast to stay legible on `background`.
pub fn text_color_for(background: Rgb) -> Rgb {
    if background.is_light() {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Entropy attributable to a span: bits = log10(guesses) * log2(10).
/// An unknown sub-guess count counts as 0 bits.
pub fn entropy_bits(guesses_log10: Option<f64>) -> f64 {
    guesses_log10.unwrap_or(0.0) * LOG2_10
}

/// Lay the spans out over a `viewport_width` x `viewport_height` strip, in
/// input order. Overlapping spans are emitted as-is; the renderer paints them
/// last-over-first. An empty password or span list yields no segments.
pub fn layout(
    password: &str,
    spans: &[WeaknessSpan],
    viewport_width: f64,
    viewport_height: f64,
) -> Vec<TimelineSegment> {
    let length = password.chars().count();
    if length == 0 || spans.is_empty() {
        return Vec::new();
    }
    spans
        .iter()
        .map(|span| segment(span, length, viewport_width, viewport_height))
        .collect()
}

fn segment(
    span: &WeaknessSpan,
    password_length: usize,
    viewport_width: f64,
    viewport_height: f64,
) -> TimelineSegment {
    let x_fraction = span.start as f64 / password_length as f64;
    let width_fraction = (span.end - span.start + 1) as f64 / password_length as f64;

    let color = color_for(&span.kind);
    let bits = entropy_bits(span.guesses_log10);
    let label = format!("{} ({:.0}b)", span.token, bits);
    let tooltip = format!(
        "{}\n'{}'\n{:.1} bits",
        span.kind.capitalized(),
        span.token,
        bits
    );

    TimelineSegment {
        x_fraction,
        width_fraction,
        x: x_fraction * viewport_width,
        width: width_fraction * viewport_width,
        height: viewport_height,
        color,
        text_color: text_color_for(color),
        label,
        tooltip,
    }
}
