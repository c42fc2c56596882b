use std::path::PathBuf;

use crate::caesar::CaesarPolicy;
use crate::ngram::WindowBoundary;
use crate::CrackError;

/// Smallest accepted n-gram width.
pub const MIN_WIDTH: usize = 1;
/// Largest accepted n-gram width.
pub const MAX_WIDTH: usize = 20;
/// Number of Caesar shifts in one full alphabet cycle.
pub const DEFAULT_SHIFTS: usize = 26;
/// Number of leading characters fed to the Caesar brute force.
pub const DEFAULT_PREFIX_LEN: usize = 25;
/// Default destination of the substitution guess.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Runtime configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// N-gram width used for the printed distribution.
    pub width: usize,
    /// Window boundary used by the counter.
    pub boundary: WindowBoundary,
    /// Number of Caesar lines to produce.
    pub caesar_shifts: usize,
    /// Length of the text prefix fed to the Caesar brute force.
    pub caesar_prefix_len: usize,
    /// How non-letter characters in the Caesar prefix are handled.
    pub caesar_policy: CaesarPolicy,
    /// Where the substitution guess is written. `None` skips the guess.
    pub output: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            width: 1,
            boundary: WindowBoundary::Exact,
            caesar_shifts: DEFAULT_SHIFTS,
            caesar_prefix_len: DEFAULT_PREFIX_LEN,
            caesar_policy: CaesarPolicy::Normalize,
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

impl AnalysisConfig {
    /// Build a default config for the given width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CrackError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(CrackError::InvalidWidth {
                width: self.width,
                min: MIN_WIDTH,
                max: MAX_WIDTH,
            });
        }
        if self.caesar_shifts == 0 {
            return Err(CrackError::InvalidConfig(
                "caesar shift count must be at least 1".into(),
            ));
        }
        if self.caesar_prefix_len == 0 {
            return Err(CrackError::InvalidConfig(
                "caesar prefix length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
