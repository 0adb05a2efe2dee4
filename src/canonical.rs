//! canonical.rs — permutation-invariant word keys
//!
//! Two words are anagrams of each other exactly when their canonical forms
//! are equal: lowercase every character, then sort the characters ascending
//! by code point. Non-alphabetic characters get no special treatment; they
//! sort by ordinal value alongside letters.

/// Produce the canonical (anagram) key for a word or tile string.
///
/// Case-insensitive and order-insensitive: `canon(w) == canon(p)` for any
/// permutation `p` of `w`'s characters, in any mix of cases. Pure and total —
/// every string input has a canonical form.
#[must_use]
pub fn canon(word: &str) -> String {
    let mut letters: Vec<char> = word.to_lowercase().chars().collect();
    // Plain code-point comparison; no tie-breaking needed since equal chars
    // are interchangeable.
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// True if `a` and `b` contain the same multiset of letters, ignoring case.
#[must_use]
pub fn is_permutation(a: &str, b: &str) -> bool {
    canon(a) == canon(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_lowercases() {
        assert_eq!("act", canon("cat"));
        assert_eq!("act", canon("TAC"));
        assert_eq!("act", canon("CaT"));
    }

    #[test]
    fn invariant_under_permutation() {
        let word = "listen";
        for shuffled in ["silent", "enlist", "tinsel", "LISTEN", "NELIST"] {
            assert_eq!(canon(word), canon(shuffled));
        }
    }

    #[test]
    fn non_alphabetic_chars_sort_by_ordinal() {
        // '1' (0x31) and '-' (0x2d) sort before any lowercase letter
        assert_eq!("-1az", canon("z1-a"));
    }

    #[test]
    fn whitespace_is_not_stripped() {
        assert_eq!(" act", canon("ca t"));
        assert_ne!(canon("cat"), canon("cat "));
    }

    #[test]
    fn empty_string_is_its_own_key() {
        assert_eq!("", canon(""));
    }

    #[test]
    fn permutation_check() {
        assert!(is_permutation("dog", "GOD"));
        assert!(!is_permutation("dog", "dogs"));
    }
}
