// src/feedback.rs
//
// Turns the oracle's warning/suggestion data into a single display message.
// Pure and deterministic.

/// Shown when the input is empty; not a failure.
pub const EMPTY_INPUT_MESSAGE: &str = "Enter a password to evaluate.";

/// Shown when the oracle had nothing to criticize.
pub const STRONG_PASSWORD_MESSAGE: &str = "\u{2705} Strong password.";

const WARNING_PREFIX: &str = "\u{26a0}\u{fe0f} ";

/// Warning first (marked, then a line break), suggestions after in oracle
/// order. With neither, the fixed affirmation.
pub fn synthesize(warning: Option<&str>, suggestions: &[String]) -> String {
    let mut message = String::new();

    if let Some(warning) = warning.filter(|w| !w.is_empty()) {
        message.push_str(WARNING_PREFIX);
        message.push_str(warning);
        message.push('\n');
    }
    if !suggestions.is_empty() {
        message.push_str(&suggestions.join("\n"));
    }
    if message.is_empty() {
        message.push_str(STRONG_PASSWORD_MESSAGE);
    }
    message
}
