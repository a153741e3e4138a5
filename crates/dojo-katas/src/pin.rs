//! PIN format validation.
//!
//! A PIN is valid iff it is exactly 4 or 6 characters long and every
//! character is an ASCII digit. Nothing else counts: no signs, no
//! whitespace, no Unicode digits.

use regex::Regex;
use std::sync::OnceLock;

/// Length-then-scan solution.
pub fn validate_pin(pin: &str) -> bool {
    (pin.len() == 4 || pin.len() == 6) && pin.chars().all(|ch| ch.is_ascii_digit())
}

/// Regex solution, anchored to the whole string.
pub fn validate_pin_regex(pin: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        PATTERN.get_or_init(|| Regex::new(r"^([0-9]{4}|[0-9]{6})$").expect("pattern is valid"));
    pattern.is_match(pin)
}
