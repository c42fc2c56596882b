use std::fs;
use std::io;
use std::path::Path;

use crate::CrackError;

/// Load the whole text file at `path` into memory.
///
/// Missing paths, non-regular files and empty files are rejected before any
/// analysis runs so the caller never divides by a zero text length.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, CrackError> {
    let path = path.as_ref();
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CrackError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_file() {
        return Err(CrackError::NotAFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    if text.is_empty() {
        return Err(CrackError::EmptyInput(path.to_path_buf()));
    }
    Ok(text)
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<(), CrackError> {
    fs::write(path, content)?;
    Ok(())
}
