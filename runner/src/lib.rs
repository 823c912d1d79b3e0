//! Running single-file front ends on top of `shellfront-core`.
//!
//! A front end is a [`ToolDefinition`] (schema, help text, report style)
//! plus a [`ProcessingEngine`]. The [`Dispatcher`] drives one invocation
//! through parsing, reading the file via a [`FileReader`], running the
//! engine and reporting the result, and hands back a [`RunOutcome`] carrying
//! the exit code for the caller to terminate with.
//!
//! [`catalog`] holds the six bundled definitions.

pub mod catalog;
pub mod dispatch;
pub mod engine;
pub mod report;
pub mod tool;

pub use dispatch::{Dispatcher, RunError, RunOutcome, RunState, exit_codes};
pub use engine::{
    Diagnostic, EngineError, EngineOutput, FileReader, FsReader, ProcessingEngine,
};
pub use tool::{ReportStyle, ToolDefinition};
