use std::fmt;
use std::io;
use std::path::Path;

use crate::CrackError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file is not valid UTF-8 text.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn crack_cli_error(context: &str, err: CrackError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a `CrackError` variant.
pub fn cli_hint(err: &CrackError) -> String {
    use CrackError::*;
    match err {
        InputNotFound(path) => format!(
            "The file {} does not exist... Exiting now ...",
            path.display()
        ),
        NotAFile(path) => format!(
            "{} is not a regular file. Please input a valid file name.",
            path.display()
        ),
        EmptyInput(path) => format!("{} is empty. Nothing to analyze.", path.display()),
        InvalidWidth { min, max, .. } => format!(
            "{err}. Please pick an integer choice from {min} to {max}."
        ),
        InvalidConfig(msg) => format!("{msg}. Invalid configuration."),
        UnsupportedCharacter { .. } => {
            format!("{err}. Drop --strict-caesar to normalize the prefix instead.")
        }
        Io(io) => format!("{io}"),
        Report(msg) => format!("{msg}. Could not write the report."),
    }
}
