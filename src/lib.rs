//! Password strength meter
//!
//! Scores a password against a five-point checklist (length, uppercase,
//! lowercase, digit, special character), rates it weak, moderate or strong
//! and explains what is missing. It can also generate a password that meets
//! every criterion.
//!
//! Common passwords are rejected outright. A small list is built in and can be
//! extended once from a file.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Custom path to the blacklist extension file
//!   (default: `./assets/blacklist.txt`)
//!
//! # Generated passwords
//!
//! The generator draws from `rand`'s thread-local generator. It is a
//! convenience for picking a compliant password, not a vetted source of
//! secrets that require guaranteed unpredictability.
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_strong_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("P@ssw0rd".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//! println!("Score: {}", evaluation.score);
//! for note in &evaluation.feedback {
//!     println!("- {}", note);
//! }
//!
//! let suggestion = generate_strong_password();
//! # let _ = suggestion;
//! ```

mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{
    BUILTIN_BLACKLIST, BlacklistError, get_blacklist, get_blacklist_path, init_blacklist,
    init_blacklist_from_path, is_blacklisted, load_blacklist,
};
pub use charset::SPECIAL_CHARACTERS;
pub use evaluator::{STRONG_MESSAGE, evaluate_password_strength};
pub use generator::{
    DEFAULT_LENGTH, generate_password, generate_password_with_rng, generate_strong_password,
};
pub use sections::{BLACKLISTED_MESSAGE, MIN_LENGTH, criteria};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_password_strength_tx};
