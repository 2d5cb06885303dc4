// src/utils/format.rs
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::models::{scenario, StrengthResult};

// Format a guess estimate for display
pub fn format_guesses(guesses: Option<f64>) -> String {
    match guesses {
        None => "N/A".to_string(),
        Some(g) if g <= 0.0 => "N/A".to_string(),
        Some(g) if g < 1e15 && g.fract() == 0.0 => group_thousands(g as u64),
        Some(g) => format!("{:.2e}", g),
    }
}

// Format the oracle's reported analysis time; absence means unknown, not free
pub fn format_calc_seconds(seconds: Option<f64>) -> String {
    match seconds {
        None => "N/A".to_string(),
        Some(s) => format!("{:.4} s", s),
    }
}

/// One crack-effort panel line, e.g. `"Offline fast hashing: 3 hours"`.
/// Scenarios the oracle did not report render as "N/A".
pub fn crack_time_line(result: &StrengthResult, scenario_key: &str, label: &str) -> String {
    let display = result
        .crack_times
        .get(scenario_key)
        .map(String::as_str)
        .unwrap_or("N/A");
    format!("{}: {}", label, display)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

lazy_static! {
    /// Explanations of the attack scenarios behind the crack-time table.
    static ref SCENARIO_TOOLTIPS: HashMap<&'static str, &'static str> = {
        let mut tooltips = HashMap::new();
        tooltips.insert(
            scenario::ONLINE_THROTTLING_100_PER_HOUR,
            "Online throttled attack (100 guesses/hour): guessing through a live \
             login form that rate-limits or locks accounts. Needs only the victim's \
             username; protections like CAPTCHA and lockout make it the slowest scenario.",
        );
        tooltips.insert(
            scenario::ONLINE_NO_THROTTLING_10_PER_SECOND,
            "Online unthrottled attack (10 guesses/second): a login endpoint with no \
             rate limiting. Still network-bound, but nothing slows the attacker down.",
        );
        tooltips.insert(
            scenario::OFFLINE_SLOW_HASHING_1E4_PER_SECOND,
            "Offline slow hashing (10,000 guesses/second): the attacker has a leaked \
             hash protected by a deliberately slow algorithm such as bcrypt or scrypt \
             and cracks it locally, with no lockouts in the way.",
        );
        tooltips.insert(
            scenario::OFFLINE_FAST_HASHING_1E10_PER_SECOND,
            "Offline fast hashing (10 billion guesses/second): a leaked hash under a \
             fast, outdated algorithm such as MD5 or SHA-1, cracked on GPU hardware. \
             The fastest and most dangerous scenario.",
        );
        tooltips
    };
}

pub fn scenario_tooltip(scenario_key: &str) -> Option<&'static str> {
    SCENARIO_TOOLTIPS.get(scenario_key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_unknown_guesses_render_na() {
        assert_eq!(format_guesses(None), "N/A");
        assert_eq!(format_guesses(Some(0.0)), "N/A");
    }

    #[test]
    fn integral_guesses_are_grouped() {
        assert_eq!(format_guesses(Some(1000.0)), "1,000");
        assert_eq!(format_guesses(Some(25.0)), "25");
        assert_eq!(format_guesses(Some(1234567.0)), "1,234,567");
    }

    #[test]
    fn huge_or_fractional_guesses_use_scientific_notation() {
        assert_eq!(format_guesses(Some(1e16)), "1.00e16");
        assert_eq!(format_guesses(Some(12.5)), "1.25e1");
    }

    #[test]
    fn unknown_calc_time_is_not_zero_cost() {
        assert_eq!(format_calc_seconds(None), "N/A");
        assert_eq!(format_calc_seconds(Some(0.0123)), "0.0123 s");
    }

    #[test]
    fn missing_scenario_key_renders_na() {
        let result = StrengthResult::empty_input("");
        assert_eq!(
            crack_time_line(&result, scenario::OFFLINE_FAST_HASHING_1E10_PER_SECOND, "Fast"),
            "Fast: N/A"
        );
    }

    #[test]
    fn present_scenario_key_renders_its_display_string() {
        let mut result = StrengthResult::empty_input("");
        result.crack_times.insert(
            scenario::ONLINE_THROTTLING_100_PER_HOUR.to_string(),
            "centuries".to_string(),
        );
        assert_eq!(
            crack_time_line(&result, scenario::ONLINE_THROTTLING_100_PER_HOUR, "Throttled"),
            "Throttled: centuries"
        );
    }

    #[test]
    fn every_known_scenario_has_a_tooltip() {
        for key in [
            scenario::ONLINE_THROTTLING_100_PER_HOUR,
            scenario::ONLINE_NO_THROTTLING_10_PER_SECOND,
            scenario::OFFLINE_SLOW_HASHING_1E4_PER_SECOND,
            scenario::OFFLINE_FAST_HASHING_1E10_PER_SECOND,
        ] {
            assert!(scenario_tooltip(key).is_some(), "{key}");
        }
        assert!(scenario_tooltip("quantum_annealing").is_none());
    }
}
