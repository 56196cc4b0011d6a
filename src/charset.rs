//! Character classes shared by the evaluator and the generator.

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";

/// Characters that satisfy the special character criterion.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Union of every class, in the order above.
pub const ALL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union_of_classes() {
        let union: Vec<u8> = UPPERCASE
            .iter()
            .chain(LOWERCASE)
            .chain(DIGITS)
            .chain(SPECIAL_CHARACTERS.as_bytes())
            .copied()
            .collect();
        assert_eq!(ALL, union.as_slice());
    }

    #[test]
    fn test_is_special() {
        assert!(SPECIAL_CHARACTERS.chars().all(is_special));
        assert_eq!(SPECIAL_CHARACTERS.len(), 8);
        assert!(!is_special('?'));
        assert!(!is_special('a'));
    }
}
