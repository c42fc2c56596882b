//! The analysis pipeline: count, normalize, brute force, guess.

use std::path::Path;

use crate::caesar::{brute_force, prepare_prefix};
use crate::config::AnalysisConfig;
use crate::files::{read_input, write_output};
use crate::frequency::FrequencyTable;
use crate::ngram::NgramTable;
use crate::report::AnalysisReport;
use crate::substitution::SubstitutionKey;
use crate::CrackError;

/// Run every analysis stage over an in-memory text.
///
/// The substitution guess is built from single characters regardless of
/// `config.width`, and only when `config.output` is set.
pub fn analyze_text(text: &str, config: &AnalysisConfig) -> Result<AnalysisReport, CrackError> {
    config.validate()?;
    let text_len = text.chars().count();
    if text_len == 0 {
        return Err(CrackError::EmptyInput("<text>".into()));
    }

    let ngrams = NgramTable::count(text, config.width, config.boundary)?;
    let frequencies = FrequencyTable::from_ngrams(&ngrams, text_len)?;

    let prefix = prepare_prefix(text, config.caesar_prefix_len, config.caesar_policy)?;
    let caesar = brute_force(&prefix, config.caesar_shifts);

    let (key, decryption) = if config.output.is_some() {
        let unigram_freqs = if config.width == 1 {
            frequencies.clone()
        } else {
            let unigrams = NgramTable::count(text, 1, config.boundary)?;
            FrequencyTable::from_ngrams(&unigrams, text_len)?
        };
        let key = SubstitutionKey::from_frequencies(&unigram_freqs);
        let decryption = key.apply(text);
        (key.pairs().to_vec(), Some(decryption))
    } else {
        (Vec::new(), None)
    };

    Ok(AnalysisReport {
        width: ngrams.width(),
        boundary: config.boundary,
        text_len: frequencies.text_len(),
        windows: ngrams.total(),
        distribution: frequencies.entries().to_vec(),
        caesar,
        key,
        decryption,
    })
}

/// Read `input`, analyze it and write the substitution guess, if any.
///
/// Nothing is written unless every stage succeeded.
pub fn run<P: AsRef<Path>>(input: P, config: &AnalysisConfig) -> Result<AnalysisReport, CrackError> {
    config.validate()?;
    let text = read_input(input)?;
    let report = analyze_text(&text, config)?;
    if let (Some(path), Some(decryption)) = (&config.output, &report.decryption) {
        write_output(path, decryption)?;
    }
    Ok(report)
}
