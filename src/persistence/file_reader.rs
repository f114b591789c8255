use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::error::{LowerLinesError, Result};

/// Convenience helpers for reading the input file with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// `true` when `path` resolves (following symlinks) to a regular file.
    pub fn is_regular_file(path: &Path) -> bool {
        path.metadata().is_ok_and(|m| m.is_file())
    }

    /// Fail with [`LowerLinesError::NotFound`] unless `path` is a regular file.
    pub fn ensure_regular_file(path: &Path) -> Result<()> {
        if Self::is_regular_file(path) {
            Ok(())
        } else {
            Err(LowerLinesError::NotFound { path: path.to_path_buf() })
        }
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> Result<BufReader<File>> {
        File::open(path).map(BufReader::new).map_err(|source| read_failure(path, source))
    }
}

pub(crate) fn read_failure(path: &Path, source: std::io::Error) -> LowerLinesError {
    LowerLinesError::ReadFailure { path: PathBuf::from(path), source }
}
