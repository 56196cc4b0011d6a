//! Character variety sections - uppercase, lowercase, digits, special chars.

use crate::charset::{SPECIAL_CHARACTERS, is_special};
use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

fn require(
    password: &SecretString,
    pred: impl Fn(char) -> bool,
    suggestion: &str,
) -> SectionResult {
    if password.expose_secret().chars().any(pred) {
        None
    } else {
        Some(suggestion.to_string())
    }
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    require(password, char::is_uppercase, "Add at least one uppercase letter.")
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    require(password, char::is_lowercase, "Add at least one lowercase letter.")
}

/// Only ASCII `0-9` count as digits.
pub fn digit_section(password: &SecretString) -> SectionResult {
    require(
        password,
        |c| c.is_ascii_digit(),
        "Include at least one digit (0-9).",
    )
}

/// Only characters from [`SPECIAL_CHARACTERS`] count; other punctuation does not.
pub fn special_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().any(is_special) {
        return None;
    }
    Some(format!(
        "Include at least one special character: {}",
        SPECIAL_CHARACTERS
    ))
}
