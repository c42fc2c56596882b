//! Sliding-window n-gram counting.

use std::collections::HashMap;

use serde::Serialize;

use crate::CrackError;

/// Which window positions the counter visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowBoundary {
    /// Every valid window: `len - n + 1` positions.
    #[default]
    Exact,
    /// `len - n - 1` positions, dropping the final two windows. Kept for
    /// output compatibility with the older script.
    Legacy,
}

impl WindowBoundary {
    /// Number of windows of width `n` scanned over a text of `len` chars.
    pub fn window_count(self, len: usize, n: usize) -> usize {
        match self {
            WindowBoundary::Exact => (len + 1).saturating_sub(n),
            WindowBoundary::Legacy => len.saturating_sub(n).saturating_sub(1),
        }
    }
}

/// One distinct n-gram and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgramEntry {
    pub gram: String,
    pub count: usize,
}

/// Occurrence counts of every distinct n-gram, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct NgramTable {
    width: usize,
    entries: Vec<NgramEntry>,
    index: HashMap<String, usize>,
    total: usize,
}

impl NgramTable {
    /// Count every width-`n` window of `text`.
    pub fn count(text: &str, n: usize, boundary: WindowBoundary) -> Result<Self, CrackError> {
        if n == 0 {
            return Err(CrackError::InvalidWidth {
                width: n,
                min: 1,
                max: usize::MAX,
            });
        }
        let chars: Vec<char> = text.chars().collect();
        let windows = boundary.window_count(chars.len(), n);
        let mut table = Self {
            width: n,
            ..Self::default()
        };
        for window in chars.windows(n).take(windows) {
            table.insert(window.iter().collect());
        }
        Ok(table)
    }

    fn insert(&mut self, gram: String) {
        self.total += 1;
        match self.index.get(&gram) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(gram.clone(), self.entries.len());
                self.entries.push(NgramEntry { gram, count: 1 });
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Sum of all counts, i.e. the number of windows scanned.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, gram: &str) -> usize {
        self.index.get(gram).map_or(0, |&i| self.entries[i].count)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[NgramEntry] {
        &self.entries
    }

    /// Entries by descending count; ties keep first-seen order.
    pub fn sorted(&self) -> Vec<NgramEntry> {
        let mut out = self.entries.clone();
        // stable sort preserves first-seen order among equal counts
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}
