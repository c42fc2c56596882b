use std::io::{self, Write};

use serde::Serialize;

use crate::caesar::CaesarLine;
use crate::frequency::FrequencyEntry;
use crate::ngram::WindowBoundary;
use crate::substitution::KeyPair;
use crate::CrackError;

/// Everything one analysis run produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// N-gram width of the distribution.
    pub width: usize,
    pub boundary: WindowBoundary,
    /// Text length in characters.
    pub text_len: usize,
    /// Number of windows scanned; equals the sum of all counts.
    pub windows: usize,
    /// N-grams by descending count with their relative frequency.
    pub distribution: Vec<FrequencyEntry>,
    pub caesar: Vec<CaesarLine>,
    /// Substitution key in ranking order. Empty when the guess was skipped.
    pub key: Vec<KeyPair>,
    /// Full text after applying `key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decryption: Option<String>,
}

fn printable(gram: &str) -> String {
    gram.escape_debug().to_string()
}

impl AnalysisReport {
    /// Human readable report. `top` limits the distribution sections.
    pub fn write_text<W: Write>(&self, w: &mut W, top: Option<usize>) -> io::Result<()> {
        let rows = top.unwrap_or(usize::MAX);

        writeln!(w, "\n\n {} - gram distribution:", self.width)?;
        for e in self.distribution.iter().take(rows) {
            writeln!(w, "{} : {}", printable(&e.gram), e.count)?;
        }

        writeln!(w, "\n\n Distribution Frequency: ")?;
        for e in self.distribution.iter().take(rows) {
            writeln!(w, "{} : {}", printable(&e.gram), e.frequency)?;
        }

        writeln!(w, "\n\n brute force caesar cipher check:")?;
        for line in &self.caesar {
            writeln!(w, "{}   - {} shifts up", line.text, line.shift)?;
        }

        if self.decryption.is_some() {
            writeln!(w, "\n\n poly-alphabetic test: ")?;
            for pair in &self.key {
                writeln!(w, "{} : {}", printable(&pair.from.to_string()), pair.to)?;
            }
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> Result<(), CrackError> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        w.write_all(b"\n")?;
        Ok(())
    }

    /// Distribution as `gram,count,frequency` rows.
    pub fn write_csv<W: Write>(&self, w: W) -> Result<(), CrackError> {
        let mut wtr = csv::Writer::from_writer(w);
        wtr.write_record(["gram", "count", "frequency"])?;
        for e in &self.distribution {
            wtr.write_record([e.gram.clone(), e.count.to_string(), e.frequency.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
