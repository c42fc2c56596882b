use serde::Serialize;

use crate::ngram::NgramTable;
use crate::CrackError;

/// Relative frequency of one n-gram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub gram: String,
    pub count: usize,
    pub frequency: f64,
}

/// N-gram frequencies ordered by descending count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrequencyTable {
    text_len: usize,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Divide every count in `table` by `text_len`.
    ///
    /// Overlapping windows are not a partition of the text, so the
    /// frequencies sum to `table.total() / text_len` rather than one.
    pub fn from_ngrams(table: &NgramTable, text_len: usize) -> Result<Self, CrackError> {
        if text_len == 0 {
            return Err(CrackError::EmptyInput("<text>".into()));
        }
        let entries = table
            .sorted()
            .into_iter()
            .map(|e| FrequencyEntry {
                frequency: e.count as f64 / text_len as f64,
                gram: e.gram,
                count: e.count,
            })
            .collect();
        Ok(Self { text_len, entries })
    }

    pub fn text_len(&self) -> usize {
        self.text_len
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }
}
