// src/lib.rs
pub mod cli;
pub mod error;
pub mod normalize;
pub mod persistence;
pub mod processor;

pub use error::{LowerLinesError, Result};
pub use processor::{LineProcessor, ProcessOptions, ProcessSummary, Stage, run_stdio};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
