//! Engine used by the `run` command until a real transformation is plugged in.
//!
//! Text tools report what they would have been invoked with; lint tools
//! report a clean run.

use serde::Serialize;
use shellfront_core::NormalizedOptions;
use shellfront_runner::{EngineError, EngineOutput, ProcessingEngine, ReportStyle, ToolDefinition};

#[derive(Debug, Serialize)]
struct Inspection<'a> {
    tool: &'a str,
    bytes: usize,
    lines: usize,
    options: &'a NormalizedOptions,
}

/// Echoes the typed options and input statistics as pretty JSON.
pub struct InspectEngine<'a> {
    tool: &'a str,
    report: ReportStyle,
}

impl<'a> InspectEngine<'a> {
    pub fn new(tool: &'a ToolDefinition) -> Self {
        Self {
            tool: tool.name(),
            report: tool.report,
        }
    }
}

impl ProcessingEngine for InspectEngine<'_> {
    fn run(&self, text: &str, options: &NormalizedOptions) -> Result<EngineOutput, EngineError> {
        if let ReportStyle::Diagnostics { .. } = self.report {
            return Ok(EngineOutput::Diagnostics(Vec::new()));
        }

        let inspection = Inspection {
            tool: self.tool,
            bytes: text.len(),
            lines: text.lines().count(),
            options,
        };
        serde_json::to_string_pretty(&inspection)
            .map(EngineOutput::Text)
            .map_err(|err| EngineError::Other(Box::new(err)))
    }
}
