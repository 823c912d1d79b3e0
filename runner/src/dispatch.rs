//! The top-level run: parse, read, process, report.
//!
//! The dispatcher never terminates the process. Every path ends in a
//! [`RunOutcome`] naming the terminal state and the exit code; the binary
//! performs the single `exit` call.

use std::io::{self, Write};

use shellfront_core::{Invocation, ParseOutcome, parse_args};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::{EngineError, EngineOutput, FileReader, ProcessingEngine};
use crate::report::write_output;
use crate::tool::ToolDefinition;

/// Exit codes for the front ends.
pub mod exit_codes {
    /// Normal completion, including lint runs with findings.
    pub const SUCCESS: i32 = 0;
    /// Help, version, or any usage error.
    pub const USAGE: i32 = -1;
    /// The input could not be read or the engine failed.
    pub const FAILURE: i32 = 1;
}

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    HelpRequested,
    VersionShown,
    ParseError,
    ReadError,
    ProcessingError,
    Done,
}

/// Result of [`Dispatcher::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub state: RunState,
    pub exit_code: i32,
}

impl RunOutcome {
    fn new(state: RunState, exit_code: i32) -> Self {
        Self { state, exit_code }
    }
}

/// Failures after parsing succeeded.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Error: cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error: {0}")]
    Engine(#[from] EngineError),
}

impl RunError {
    pub fn state(&self) -> RunState {
        match self {
            Self::Read { .. } => RunState::ReadError,
            Self::Engine(_) => RunState::ProcessingError,
        }
    }
}

/// Drives one invocation of a front end.
pub struct Dispatcher<'a> {
    tool: &'a ToolDefinition,
    reader: &'a dyn FileReader,
    engine: &'a dyn ProcessingEngine,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        tool: &'a ToolDefinition,
        reader: &'a dyn FileReader,
        engine: &'a dyn ProcessingEngine,
    ) -> Self {
        Self {
            tool,
            reader,
            engine,
        }
    }

    /// Runs the front end over `args` (program name excluded), writing every
    /// report, help screen and diagnostic to `out`.
    ///
    /// Only a failure to write to `out` is returned as an error.
    pub fn run<S: AsRef<str>, W: Write>(&self, args: &[S], out: &mut W) -> io::Result<RunOutcome> {
        let tool = self.tool.name();
        let invocation = match parse_args(&self.tool.schema, args) {
            Ok(ParseOutcome::Ready(invocation)) => invocation,
            Ok(ParseOutcome::ShowHelp(reason)) => {
                debug!(tool, ?reason, "showing help");
                write!(out, "{}", self.tool.render_help())?;
                return Ok(RunOutcome::new(RunState::HelpRequested, exit_codes::USAGE));
            }
            Ok(ParseOutcome::ShowVersion(version)) => {
                writeln!(out, "{version}")?;
                return Ok(RunOutcome::new(RunState::VersionShown, exit_codes::USAGE));
            }
            Err(err) => {
                debug!(tool, error = %err, "usage error");
                writeln!(out, "{err}")?;
                writeln!(out)?;
                return Ok(RunOutcome::new(RunState::ParseError, exit_codes::USAGE));
            }
        };

        match self.process(&invocation) {
            Ok(output) => {
                write_output(out, &self.tool.report, &output)?;
                Ok(RunOutcome::new(RunState::Done, exit_codes::SUCCESS))
            }
            Err(err) => {
                warn!(tool, error = %err, "run failed");
                writeln!(out, "{err}")?;
                Ok(RunOutcome::new(err.state(), exit_codes::FAILURE))
            }
        }
    }

    fn process(&self, invocation: &Invocation) -> Result<EngineOutput, RunError> {
        let text = self
            .reader
            .read(&invocation.filename)
            .map_err(|source| RunError::Read {
                path: invocation.filename.clone(),
                source,
            })?;
        info!(
            tool = self.tool.name(),
            file = %invocation.filename,
            bytes = text.len(),
            options = invocation.options.len(),
            "processing input"
        );
        Ok(self.engine.run(&text, &invocation.options)?)
    }
}
