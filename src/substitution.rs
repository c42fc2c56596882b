//! Frequency-matching substitution guess.
//!
//! Observed characters are ranked by frequency and paired, rank for rank,
//! with the English letter ranking below. This is a heuristic and only means
//! anything on single characters.

use std::collections::HashMap;

use serde::Serialize;

use crate::frequency::FrequencyTable;

/// English letters from most to least frequent (Lewand).
pub const ENGLISH_BY_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Observed character and its guessed plaintext letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPair {
    pub from: char,
    pub to: char,
}

/// Guessed mapping from ciphertext to plaintext characters.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionKey {
    pairs: Vec<KeyPair>,
    lookup: HashMap<char, char>,
}

impl SubstitutionKey {
    /// Pair the unigram ranking in `table` with [`ENGLISH_BY_FREQUENCY`].
    ///
    /// Space maps to itself and does not consume a rank. After 26
    /// assignments the reference ranking starts over. Multi-character grams
    /// are skipped.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let reference: Vec<char> = ENGLISH_BY_FREQUENCY.chars().collect();
        let mut key = Self::default();
        let mut rank = 0usize;
        for entry in table.entries() {
            let mut chars = entry.gram.chars();
            let (Some(from), None) = (chars.next(), chars.next()) else {
                continue;
            };
            let to = if from == ' ' {
                ' '
            } else {
                let to = reference[rank % reference.len()];
                rank += 1;
                to
            };
            key.pairs.push(KeyPair { from, to });
            key.lookup.insert(from, to);
        }
        key
    }

    /// Pairs in ranking order.
    pub fn pairs(&self) -> &[KeyPair] {
        &self.pairs
    }

    pub fn get(&self, from: char) -> Option<char> {
        self.lookup.get(&from).copied()
    }

    /// Substitute every character of `text` in one pass. Characters with no
    /// mapping are copied through.
    pub fn apply(&self, text: &str) -> String {
        text.chars().map(|c| self.get(c).unwrap_or(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::{NgramTable, WindowBoundary};

    fn key_for(text: &str) -> SubstitutionKey {
        let t = NgramTable::count(text, 1, WindowBoundary::Exact).unwrap();
        let f = FrequencyTable::from_ngrams(&t, text.chars().count()).unwrap();
        SubstitutionKey::from_frequencies(&f)
    }

    #[test]
    fn top_ranks_map_to_e_and_t() {
        let key = key_for("eeeeeaaaaa ");
        assert_eq!(key.get('e'), Some('e'));
        assert_eq!(key.get('a'), Some('t'));
        assert_eq!(key.get(' '), Some(' '));
    }

    #[test]
    fn space_does_not_consume_rank() {
        let key = key_for("   xxxyy");
        assert_eq!(key.get(' '), Some(' '));
        assert_eq!(key.get('x'), Some('e'));
        assert_eq!(key.get('y'), Some('t'));
    }

    #[test]
    fn no_cascading_replacement() {
        // x->e and e->t; a repeated whole-text replace would turn x into t
        let key = key_for("xxxee");
        assert_eq!(key.get('x'), Some('e'));
        assert_eq!(key.get('e'), Some('t'));
        assert_eq!(key.apply("xe"), "et");
    }

    #[test]
    fn ranks_cycle_after_26() {
        let alphabet: String = ('a'..='z').chain(['0']).collect();
        let key = key_for(&alphabet);
        assert_eq!(key.get('a'), Some('e'));
        assert_eq!(key.get('z'), Some('z'));
        assert_eq!(key.get('0'), Some('e'));
    }

    #[test]
    fn unmapped_chars_pass_through() {
        let key = key_for("ab");
        assert_eq!(key.apply("abc!"), "etc!");
    }

    #[test]
    fn multi_char_grams_skipped() {
        let t = NgramTable::count("abab", 2, WindowBoundary::Exact).unwrap();
        let f = FrequencyTable::from_ngrams(&t, 4).unwrap();
        assert!(SubstitutionKey::from_frequencies(&f).pairs().is_empty());
    }
}
