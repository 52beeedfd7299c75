//! Syntax checks for the fields collected by the prompts.
//!
//! Every function here is pure: it looks at the raw string it is given and
//! nothing else. Callers trim input before validating.

use std::ops::RangeInclusive;

fn is_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Optional leading `-` followed by one or more digits.
#[must_use]
pub fn is_integer(input: &str) -> bool {
    is_digits(input.strip_prefix('-').unwrap_or(input))
}

/// One or more digits, no sign.
#[must_use]
pub fn is_non_negative_integer(input: &str) -> bool {
    is_digits(input)
}

/// A non-negative integer that also falls inside `range`.
///
/// Values too large to represent are rejected the same way as out-of-range ones.
///
/// ```
/// use mccmd_core::validation::is_bounded_integer;
///
/// assert!(is_bounded_integer("255", &(1..=255)));
/// assert!(!is_bounded_integer("0", &(1..=255)));
/// assert!(!is_bounded_integer("-1", &(1..=255)));
/// ```
#[must_use]
pub fn is_bounded_integer(input: &str, range: &RangeInclusive<u32>) -> bool {
    is_non_negative_integer(input)
        && input
            .parse::<u32>()
            .is_ok_and(|value| range.contains(&value))
}

/// A single coordinate: `12`, `-3`, `~`, `~5` or `~-5`.
#[must_use]
pub fn is_position_token(token: &str) -> bool {
    match token.strip_prefix('~') {
        Some("") => true,
        Some(offset) => is_integer(offset),
        None => is_integer(token),
    }
}

/// Exactly three whitespace-separated coordinates.
#[must_use]
pub fn is_position(input: &str) -> bool {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    tokens.len() == 3 && tokens.iter().all(|token| is_position_token(token))
}

#[must_use]
pub fn is_non_empty(input: &str) -> bool {
    !input.trim().is_empty()
}

/// `true` or `false`, case-insensitive.
#[must_use]
pub fn parse_boolean(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// A yes/no answer where an empty answer picks `default`.
#[must_use]
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Drops redundant leading zeros from an already validated non-negative integer.
#[must_use]
pub fn normalize_non_negative(input: &str) -> String {
    let trimmed = input.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
