//! Brute force over every Caesar shift of a short text prefix.

use serde::Serialize;

use crate::CrackError;

const ALPHABET_LEN: usize = 26;

/// Treatment of characters outside `a-z` and space in the Caesar prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaesarPolicy {
    /// Lowercase ASCII capitals, turn every other non-letter into a space.
    #[default]
    Normalize,
    /// Reject anything but `a-z` and space.
    Strict,
}

/// One line of brute-force output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaesarLine {
    pub shift: usize,
    pub text: String,
}

/// Take the first `len` characters of `text` and enforce the `a-z`/space
/// alphabet according to `policy`.
pub fn prepare_prefix(text: &str, len: usize, policy: CaesarPolicy) -> Result<String, CrackError> {
    text.chars()
        .take(len)
        .enumerate()
        .map(|(position, ch)| match ch {
            'a'..='z' | ' ' => Ok(ch),
            'A'..='Z' if policy == CaesarPolicy::Normalize => Ok(ch.to_ascii_lowercase()),
            _ if policy == CaesarPolicy::Normalize => Ok(' '),
            _ => Err(CrackError::UnsupportedCharacter { ch, position }),
        })
        .collect()
}

fn shift_char(ch: char, k: usize) -> char {
    match ch {
        'a'..='z' => {
            let offset = (ch as u8 - b'a') as usize;
            (b'a' + ((offset + k) % ALPHABET_LEN) as u8) as char
        }
        other => other,
    }
}

/// Rotate every lowercase letter of `text` by `k` positions.
pub fn shift_text(text: &str, k: usize) -> String {
    let k = k % ALPHABET_LEN;
    text.chars().map(|c| shift_char(c, k)).collect()
}

/// Produce `shifts` lines, line `k` holding `prefix` shifted by `k`.
pub fn brute_force(prefix: &str, shifts: usize) -> Vec<CaesarLine> {
    (0..shifts)
        .map(|shift| CaesarLine {
            shift,
            text: shift_text(prefix, shift),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_z_to_a() {
        assert_eq!(shift_text("xyz", 1), "yza");
        assert_eq!(shift_text("abc", 25), "zab");
    }

    #[test]
    fn spaces_untouched() {
        assert_eq!(shift_text("a b", 3), "d e");
    }

    #[test]
    fn full_cycle_is_identity() {
        let text = "the quick brown fox";
        assert_eq!(shift_text(text, 26), text);
        assert_eq!(shift_text(&shift_text(text, 7), 19), text);
    }

    #[test]
    fn brute_force_lines() {
        let lines = brute_force("ab", 26);
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0].text, "ab");
        assert_eq!(lines[1].text, "bc");
        assert_eq!(lines[25].text, "za");
        assert_eq!(lines[25].shift, 25);
    }

    #[test]
    fn twenty_seven_shifts_repeats_first_line() {
        let lines = brute_force("hello", 27);
        assert_eq!(lines[26].text, lines[0].text);
    }

    #[test]
    fn prefix_truncates_and_normalizes() {
        let p = prepare_prefix("Hello, World! and more text here", 12, CaesarPolicy::Normalize).unwrap();
        assert_eq!(p, "hello  world");
    }

    #[test]
    fn strict_rejects_punctuation() {
        let err = prepare_prefix("ab,c", 25, CaesarPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            CrackError::UnsupportedCharacter { ch: ',', position: 2 }
        ));
        assert!(prepare_prefix("ab c", 25, CaesarPolicy::Strict).is_ok());
    }
}
