//! Writing engine results to the report channel.

use std::io::{self, Write};

use crate::engine::EngineOutput;
use crate::tool::ReportStyle;

/// Writes a successful engine result.
///
/// Text results are followed by a newline; diagnostics are written one per
/// line, or replaced by the style's clean sentence when there are none.
/// An empty result under a text style prints nothing.
pub fn write_output<W: Write>(
    out: &mut W,
    style: &ReportStyle,
    output: &EngineOutput,
) -> io::Result<()> {
    match output {
        EngineOutput::Text(text) => writeln!(out, "{text}"),
        EngineOutput::Diagnostics(diagnostics) if diagnostics.is_empty() => {
            match style.clean_message() {
                Some(message) => writeln!(out, "{message}"),
                None => Ok(()),
            }
        }
        EngineOutput::Diagnostics(diagnostics) => {
            for diagnostic in diagnostics {
                writeln!(out, "{diagnostic}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Diagnostic;

    use super::*;

    fn render(style: ReportStyle, output: EngineOutput) -> String {
        let mut out = Vec::new();
        write_output(&mut out, &style, &output).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_is_printed_verbatim() {
        assert_eq!(
            render(ReportStyle::Text, EngineOutput::Text("a{color:red}".into())),
            "a{color:red}\n"
        );
    }

    #[test]
    fn test_clean_lint_prints_sentence() {
        let style = ReportStyle::Diagnostics {
            clean_message: "JSLint does not report any problem.",
        };
        assert_eq!(
            render(style, EngineOutput::Diagnostics(Vec::new())),
            "JSLint does not report any problem.\n"
        );
    }

    #[test]
    fn test_text_style_has_no_clean_sentence() {
        assert_eq!(ReportStyle::Text.clean_message(), None);
        assert_eq!(render(ReportStyle::Text, EngineOutput::Diagnostics(Vec::new())), "");
    }

    #[test]
    fn test_findings_one_per_line() {
        let style = ReportStyle::Diagnostics {
            clean_message: "unused",
        };
        let output = EngineOutput::Diagnostics(vec![
            Diagnostic::new(1, 5, "Missing 'use strict' statement."),
            Diagnostic::new(7, 1, "Unexpected '++'."),
        ]);
        assert_eq!(
            render(style, output),
            "At line 1 column 5: Missing 'use strict' statement.\nAt line 7 column 1: Unexpected '++'.\n"
        );
    }
}
