//! Help screen rendering.
//!
//! The option block is generated from the schema; every other line is
//! static text supplied by the front end.

use serde::Serialize;

use crate::types::OptionSchema;

/// Static, tool-specific help text surrounding the generated option block.
///
/// Blocks are separated by a blank line when rendered; an empty string
/// inside a block renders as a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpText {
    /// Lines after the usage line describing what the tool does.
    pub description: &'static [&'static str],
    /// Description for `--version` in the general-options block.
    pub version_description: Option<&'static str>,
    /// Heading above the schema entries; the block is omitted when `None`.
    pub options_heading: Option<&'static str>,
    /// Width that `    --<name>` is padded to.
    pub column: usize,
    /// Padding for the `--help` / `--version` entries when it differs from
    /// `column`.
    pub general_column: Option<usize>,
    pub examples: &'static [&'static str],
    /// Closing lines (reference URL, copyright).
    pub footer: &'static [&'static str],
}

impl HelpText {
    pub const DEFAULT_COLUMN: usize = 20;
}

impl Default for HelpText {
    fn default() -> Self {
        Self {
            description: &[],
            version_description: None,
            options_heading: None,
            column: Self::DEFAULT_COLUMN,
            general_column: None,
            examples: &[],
            footer: &[],
        }
    }
}

/// Renders the complete help screen, ending with a blank line.
///
/// # Examples
///
/// ```
/// use shellfront_core::{HelpText, OptionSchema, OptionSpec, render_help};
///
/// let schema = OptionSchema::new("jsbeautify")
///     .with_option(OptionSpec::int("indent-size", "indentation size (default is 4)"));
/// let help = HelpText {
///     options_heading: Some("Formatting options:"),
///     ..HelpText::default()
/// };
///
/// let text = render_help(&schema, &help);
/// assert!(text.starts_with("Usage:\n    jsbeautify [options] filename\n"));
/// assert!(text.contains("    --help          Show this help screen\n"));
/// assert!(text.contains("    --indent-size   indentation size (default is 4)\n"));
/// ```
pub fn render_help(schema: &OptionSchema, help: &HelpText) -> String {
    let mut out = String::new();

    out.push_str("Usage:\n");
    out.push_str(&format!("    {} [options] filename\n\n", schema.command));

    push_block(&mut out, help.description);

    out.push_str("General options:\n");
    let general_column = help.general_column.unwrap_or(help.column);
    out.push_str(&option_line("help", "Show this help screen", general_column));
    if let Some(desc) = help.version_description {
        out.push_str(&option_line("version", desc, general_column));
    }
    out.push('\n');

    if let Some(heading) = help.options_heading {
        out.push_str(heading);
        out.push('\n');
        for option in &schema.options {
            out.push_str(&option_line(&option.name, &option.description, help.column));
        }
        out.push('\n');
    }

    push_block(&mut out, help.examples);
    push_block(&mut out, help.footer);

    out
}

/// Formats one `    --<name>` entry padded to `column`.
///
/// Names that reach the column are kept whole and separated from the
/// description by a single space.
pub fn option_line(name: &str, description: &str, column: usize) -> String {
    let mut line = format!("    --{name}");
    if line.len() < column {
        line.push_str(&" ".repeat(column - line.len()));
    } else {
        line.push(' ');
    }
    line.push_str(description);
    line.push('\n');
    line
}

fn push_block(out: &mut String, lines: &[&str]) {
    if lines.is_empty() {
        return;
    }
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use crate::types::OptionSpec;

    use super::*;

    #[test]
    fn test_option_line_pads_to_column() {
        assert_eq!(
            option_line("maxerr", "the maximum number of warnings", 16),
            "    --maxerr    the maximum number of warnings\n"
        );
    }

    #[test]
    fn test_option_line_never_truncates() {
        assert_eq!(
            option_line("a-very-long-option", "desc", 16),
            "    --a-very-long-option desc\n"
        );
    }

    #[test]
    fn test_empty_schema_without_heading_skips_block() {
        let schema = OptionSchema::new("cssmin").with_version("x");
        let help = HelpText {
            version_description: Some("Display version number"),
            footer: &["For more information, go to http://www.phpied.com/yuicompressor-cssmin."],
            ..HelpText::default()
        };

        let expected = "\
Usage:
    cssmin [options] filename

General options:
    --help          Show this help screen
    --version       Display version number

For more information, go to http://www.phpied.com/yuicompressor-cssmin.

";
        assert_eq!(render_help(&schema, &help), expected);
    }

    #[test]
    fn test_entries_follow_schema_order() {
        let schema = OptionSchema::new("t")
            .with_option(OptionSpec::flag("zeta", "z"))
            .with_option(OptionSpec::flag("alpha", "a"));
        let help = HelpText {
            options_heading: Some("Options:"),
            ..HelpText::default()
        };
        let text = render_help(&schema, &help);
        let zeta = text.find("--zeta").unwrap();
        let alpha = text.find("--alpha").unwrap();
        assert!(zeta < alpha);
    }
}
