//! Password evaluation sections
//!
//! Each section checks one criterion and returns a suggestion when the
//! password fails it.

use crate::charset::SPECIAL_CHARACTERS;

mod blacklist;
mod length;
mod variety;

pub use blacklist::{BLACKLISTED_MESSAGE, blacklist_section};
pub use length::{MIN_LENGTH, length_section};
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - criterion not met
/// - `None` - criterion met
pub type SectionResult = Option<String>;

/// What a password needs to be rated strong, in the order sections run.
pub fn criteria() -> [String; 5] {
    [
        format!("Minimum length: {} characters", MIN_LENGTH),
        "At least one uppercase letter".to_string(),
        "At least one lowercase letter".to_string(),
        "At least one digit (0-9)".to_string(),
        format!("At least one special character: {}", SPECIAL_CHARACTERS),
    ]
}
