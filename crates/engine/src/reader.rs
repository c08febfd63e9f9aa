use crate::error::{EngineError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[cfg(any(target_os = "linux", target_os = "android"))]
const ELOOP: Option<i32> = Some(40);
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
const ELOOP: Option<i32> = Some(62);
#[cfg(not(unix))]
const ELOOP: Option<i32> = None;

/// Lines used when the input path is not a regular file.
pub const FALLBACK_LINES: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

/// Where a [`Lines`] value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    File(PathBuf),
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lines {
    pub source: LineSource,
    pub lines: Vec<String>,
}

impl Lines {
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            source: LineSource::Fallback,
            lines: FALLBACK_LINES.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == LineSource::Fallback
    }
}

/// Read the lines of `path`, or the fallback sample when `path` is missing or
/// is not a regular file.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file exists but cannot be read (or
/// its metadata cannot be queried for a reason other than absence), and
/// [`EngineError::InvalidEncoding`] if its contents are not UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Lines> {
    let path = path.as_ref();

    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if is_absent(&e) => {
            debug!("{} not found, using fallback lines", path.display());
            return Ok(Lines::fallback());
        }
        Err(e) => {
            return Err(EngineError::FileRead {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    if !meta.is_file() {
        debug!("{} is not a regular file, using fallback lines", path.display());
        return Ok(Lines::fallback());
    }

    let bytes = fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|e| EngineError::InvalidEncoding {
        path: path.to_path_buf(),
        source: e,
    })?;

    let lines = split_lines(&text);
    debug!("read {} lines from {}", lines.len(), path.display());

    Ok(Lines {
        source: LineSource::File(path.to_path_buf()),
        lines,
    })
}

/// Metadata errors that mean "no regular file here" rather than a failed read.
fn is_absent(e: &std::io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
        || (ELOOP.is_some() && e.raw_os_error() == ELOOP)
}

/// Split text on `\n`.
///
/// A `\r` directly before the `\n` is dropped, and a trailing terminator does
/// not produce an extra empty line. Interior empty lines are kept.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(ToString::to_string).collect()
}
