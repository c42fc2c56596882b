//! Frequency-based cryptanalysis of text files.
//!
//! The pipeline counts n-grams, derives their relative frequency, brute
//! forces every Caesar shift of a short prefix and guesses a monoalphabetic
//! substitution key by ranking observed characters against English letter
//! frequency.

pub mod analysis;
pub mod caesar;
pub mod config;
mod error;
pub mod files;
pub mod frequency;
pub mod io_utils;
pub mod ngram;
pub mod report;
pub mod substitution;

pub use analysis::{analyze_text, run};
pub use caesar::{brute_force, prepare_prefix, shift_text, CaesarLine, CaesarPolicy};
pub use config::AnalysisConfig;
pub use error::CrackError;
pub use files::{read_input, write_output};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use ngram::{NgramEntry, NgramTable, WindowBoundary};
pub use report::AnalysisReport;
pub use substitution::{KeyPair, SubstitutionKey, ENGLISH_BY_FREQUENCY};
