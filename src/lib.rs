//! Password strength and generation engine.
//!
//! The core behind the TierPass strength auditor: it normalizes the output of
//! an external strength-scoring oracle into [`models::StrengthResult`],
//! synthesizes human guidance from the oracle's feedback, mints passwords by
//! bounded rejection sampling, and lays detected weakness spans out as a
//! proportional visual timeline. It owns no window, no persistence and no
//! network surface; the GUI shell consumes what it produces.

pub mod analyzer;
pub mod feedback;
pub mod generators;
pub mod models;
pub mod oracle;
pub mod timeline;
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerError};
pub use generators::{GeneratorError, PasswordGenerator, WordPool};
pub use models::{
    GenerationRequest, GenerationStrategy, PatternKind, Rgb, StrengthResult, TimelineSegment,
    WeaknessSpan,
};
pub use oracle::{StrengthOracle, ZxcvbnOracle};
