//! Strong password generator.
//!
//! The default entry points draw from `rand`'s thread-local generator. Output
//! is meant as a usability aid; it is not audited for generating secrets that
//! need guaranteed unpredictability.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{ALL, DIGITS, LOWERCASE, SPECIAL_CHARACTERS, UPPERCASE};
use crate::sections::MIN_LENGTH;

/// Length used by [`generate_strong_password`].
pub const DEFAULT_LENGTH: usize = 12;

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> char {
    alphabet[rng.random_range(0..alphabet.len())] as char
}

/// Generates a password that satisfies every evaluation criterion.
///
/// `length` below [`MIN_LENGTH`] is raised to it.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with_rng(length, &mut rand::rng())
}

/// Generates a password of [`DEFAULT_LENGTH`] characters.
pub fn generate_strong_password() -> SecretString {
    generate_password(DEFAULT_LENGTH)
}

/// Same as [`generate_password`] with a caller-supplied random source.
///
/// Storage grows as characters are added, so the only upper bound on
/// `length` is available memory.
pub fn generate_password_with_rng<R: Rng + ?Sized>(length: usize, rng: &mut R) -> SecretString {
    let length = length.max(MIN_LENGTH);

    // Ensure at least one character from each class
    let mut chars: Vec<char> = vec![
        pick(rng, UPPERCASE),
        pick(rng, LOWERCASE),
        pick(rng, DIGITS),
        pick(rng, SPECIAL_CHARACTERS.as_bytes()),
    ];

    while chars.len() < length {
        chars.push(pick(rng, ALL));
    }

    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "strong password generated");

    SecretString::new(chars.into_iter().collect::<String>().into())
}
