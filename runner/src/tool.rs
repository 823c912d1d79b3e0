//! Static definition of one front end.

use serde::Serialize;
use shellfront_core::{HelpText, OptionSchema, render_help};

/// How a successful engine result is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum ReportStyle {
    /// Print the transformed text.
    Text,
    /// Print one line per finding, or `clean_message` when there are none.
    Diagnostics { clean_message: &'static str },
}

impl ReportStyle {
    /// The sentence for a run without findings; text tools have none.
    pub fn clean_message(&self) -> Option<&'static str> {
        match self {
            Self::Diagnostics { clean_message } => Some(*clean_message),
            Self::Text => None,
        }
    }
}

/// Everything the dispatcher needs to know about a tool except its engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    pub schema: OptionSchema,
    pub help: HelpText,
    pub report: ReportStyle,
}

impl ToolDefinition {
    pub fn new(schema: OptionSchema, help: HelpText, report: ReportStyle) -> Self {
        Self {
            schema,
            help,
            report,
        }
    }

    pub fn name(&self) -> &str {
        &self.schema.command
    }

    pub fn render_help(&self) -> String {
        render_help(&self.schema, &self.help)
    }
}
