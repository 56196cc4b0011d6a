//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length, counted in characters.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Increase password length to at least {} characters.",
            MIN_LENGTH
        ));
    }
    None
}
