//! Short code generation.
//!
//! Codes are drawn independently and uniformly from a 62-symbol alphabet
//! using the thread-local CSPRNG, so they are neither sequential nor
//! enumerable. Uniqueness is not guaranteed here: the mapping store rejects
//! duplicates and the allocator retries.

use rand::Rng;

/// Alphabet for generated codes: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Codes that would be shadowed by fixed routes and are never issued.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Never returns one of [`RESERVED_CODES`].
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::{generate_code, is_well_formed_code};
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(is_well_formed_code(&code));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    loop {
        let code: String = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();

        if !RESERVED_CODES.contains(&code.as_str()) {
            return code;
        }
    }
}

/// Returns `true` if `code` has the shape of a generated code.
///
/// Lookups never require this; it is used by tests and the admin CLI.
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_unique_symbols() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(unique.len(), 62);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric()),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_covers_all_character_classes() {
        let joined: String = (0..2000).map(|_| generate_code()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 1000 draws from ~5.7e10 codes; a single repeat is astronomically unlikely
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_reserved_codes_are_well_formed() {
        for &reserved in RESERVED_CODES {
            assert!(is_well_formed_code(reserved), "{reserved} is not a drawable code");
        }
    }

    #[test]
    fn test_is_well_formed_code() {
        assert!(is_well_formed_code("aB3dEf"));
        assert!(is_well_formed_code("ZZZZZZ"));
        assert!(!is_well_formed_code("abc"));
        assert!(!is_well_formed_code("abcdefg"));
        assert!(!is_well_formed_code("ab-def"));
        assert!(!is_well_formed_code("äbcdef"));
        assert!(!is_well_formed_code(""));
    }
}
