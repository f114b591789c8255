// src/processor.rs
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::{
    error::{LowerLinesError, Result},
    normalize::{LineSplitter, normalize_line},
    persistence::{FileReader, read_failure},
};

/// Options for a single run, usually built from [`crate::cli::Args`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub path: PathBuf,
    /// Write `Done.` to the error stream after the last line.
    pub emit_done: bool,
}

impl ProcessOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), emit_done: true }
    }
}

/// 処理の進行段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Processing,
    Done,
    Failed,
}

/// Result of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    pub lines: usize,
}

/// Validates the input path, then streams every line trimmed and lowercased.
///
/// `out` receives the announcement and the normalized lines; `err` receives the
/// completion notice. Error messages are left to the caller, see
/// [`LowerLinesError`]'s `Display`.
pub struct LineProcessor<O, E> {
    options: ProcessOptions,
    out: O,
    err: E,
    stage: Stage,
}

impl<O: Write, E: Write> LineProcessor<O, E> {
    pub fn new(options: ProcessOptions, out: O, err: E) -> Self {
        Self { options, out, err, stage: Stage::Validating }
    }

    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Give back the writers, e.g. to inspect captured output.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Run Validating → Processing → Done.
    ///
    /// # Errors
    /// [`LowerLinesError::NotFound`] if the path is not a regular file,
    /// [`LowerLinesError::ReadFailure`] if opening or decoding fails partway, and
    /// [`LowerLinesError::Output`] if a writer fails. Lines written before a
    /// failure are flushed and stay written.
    pub fn run(&mut self) -> Result<ProcessSummary> {
        let result = self.run_stages();
        if result.is_err() {
            self.stage = Stage::Failed;
            if let Err(e) = self.out.flush() {
                debug!("flush after failure discarded: {e}");
            }
        }
        result
    }

    fn run_stages(&mut self) -> Result<ProcessSummary> {
        let path = self.options.path.clone();
        debug!("validating {}", path.display());
        FileReader::ensure_regular_file(&path)?;

        self.stage = Stage::Processing;
        writeln!(self.out, "Processing {}...", path.display()).map_err(LowerLinesError::Output)?;

        let lines = self.emit_lines(&path)?;
        self.out.flush().map_err(LowerLinesError::Output)?;
        debug!("emitted {lines} lines from {}", path.display());

        if self.options.emit_done {
            writeln!(self.err, "Done.").map_err(LowerLinesError::Output)?;
            self.err.flush().map_err(LowerLinesError::Output)?;
        }
        self.stage = Stage::Done;
        Ok(ProcessSummary { lines })
    }

    /// The reader lives only inside this call, so the handle is closed on every path.
    fn emit_lines(&mut self, path: &Path) -> Result<usize> {
        let reader = FileReader::open_buffered(path)?;
        let mut count = 0;
        for line in LineSplitter::new(reader) {
            let line = line.map_err(|source| read_failure(path, source))?;
            writeln!(self.out, "{}", normalize_line(&line)).map_err(LowerLinesError::Output)?;
            count += 1;
            trace!("line {count}");
        }
        Ok(count)
    }
}

/// Run against the process's stdout/stderr.
///
/// # Errors
/// Same as [`LineProcessor::run`].
pub fn run_stdio(options: ProcessOptions) -> Result<ProcessSummary> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    LineProcessor::new(options, stdout.lock(), stderr.lock()).run()
}
