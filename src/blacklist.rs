//! Blacklist management module
//!
//! A small built-in list of common passwords is always active. Hosts can
//! extend it once at startup from a newline-separated file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Passwords rejected regardless of any file extension. Stored lower-case.
pub const BUILTIN_BLACKLIST: [&str; 6] = [
    "password",
    "password123",
    "123456",
    "qwerty",
    "letmein",
    "admin",
];

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

static EXTRA_PASSWORDS: OnceLock<HashSet<String>> = OnceLock::new();

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Extends the blacklist from the file named by [`get_blacklist_path`].
///
/// # Errors
///
/// See [`init_blacklist_from_path`].
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Extends the blacklist from a specific file path.
///
/// The extension is stored once for the life of the process. Later calls
/// return the number of entries already loaded and do not read the file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if let Some(existing) = EXTRA_PASSWORDS.get() {
        return Ok(existing.len());
    }

    let path = path.as_ref();
    let set = load_blacklist(path)?;

    let count = EXTRA_PASSWORDS.get_or_init(|| set).len();

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Parses a blacklist file without touching process state.
///
/// Lines are trimmed and lower-cased; blank lines are skipped.
pub fn load_blacklist<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, BlacklistError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    Ok(set)
}

/// Returns the effective blacklist: built-in entries plus any loaded extension.
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = BUILTIN_BLACKLIST.iter().map(|s| s.to_string()).collect();
    if let Some(extra) = EXTRA_PASSWORDS.get() {
        set.extend(extra.iter().cloned());
    }
    set
}

/// Checks if a password is blacklisted (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    BUILTIN_BLACKLIST.contains(&lowered.as_str())
        || EXTRA_PASSWORDS
            .get()
            .is_some_and(|extra| extra.contains(&lowered))
}
