use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrackError {
    /// Input path does not exist.
    #[error("the file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// Input path exists but is a directory or other non-regular file.
    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    /// Zero-length input; frequencies would divide by zero.
    #[error("input {} is empty", .0.display())]
    EmptyInput(PathBuf),

    /// N-gram width outside the accepted range.
    #[error("invalid n-gram width {width}: expected {min}..={max}")]
    InvalidWidth { width: usize, min: usize, max: usize },

    /// Any other rejected configuration value.
    #[error("config error: {0}")]
    InvalidConfig(String),

    /// Caesar prefix contains something other than `a-z` or space.
    #[error("unsupported character {ch:?} at position {position} in caesar prefix")]
    UnsupportedCharacter { ch: char, position: usize },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or CSV report serialization failure.
    #[error("report error: {0}")]
    Report(String),
}

impl From<serde_json::Error> for CrackError {
    fn from(err: serde_json::Error) -> Self {
        CrackError::Report(err.to_string())
    }
}

impl From<csv::Error> for CrackError {
    fn from(err: csv::Error) -> Self {
        CrackError::Report(err.to_string())
    }
}
