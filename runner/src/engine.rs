//! Capabilities the dispatcher is handed: reading the input file and running
//! the processing engine.

use std::fmt;
use std::fs;
use std::io;

use serde::Serialize;
use shellfront_core::NormalizedOptions;
use thiserror::Error;

/// Reads the whole input file as text.
pub trait FileReader {
    fn read(&self, path: &str) -> io::Result<String>;
}

/// [`FileReader`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &str) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

/// One finding reported by a lint-style engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub reason: String,
}

impl Diagnostic {
    pub fn new(line: usize, column: usize, reason: &str) -> Self {
        Self {
            line,
            column,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At line {} column {}: {}",
            self.line, self.column, self.reason
        )
    }
}

/// What an engine produced on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum EngineOutput {
    /// Transformed text (reformatters, minifiers).
    Text(String),
    /// Findings (linters); empty means the input is clean.
    Diagnostics(Vec<Diagnostic>),
}

/// Failure raised by an engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// The text transformation a front end wraps.
///
/// Closures with the matching signature implement it, which keeps test
/// doubles and small adapters short.
pub trait ProcessingEngine {
    fn run(&self, text: &str, options: &NormalizedOptions) -> Result<EngineOutput, EngineError>;
}

impl<F> ProcessingEngine for F
where
    F: Fn(&str, &NormalizedOptions) -> Result<EngineOutput, EngineError>,
{
    fn run(&self, text: &str, options: &NormalizedOptions) -> Result<EngineOutput, EngineError> {
        self(text, options)
    }
}
