//! The six bundled front ends: two beautifiers, two minifiers, two linters.
//!
//! Each definition pairs an option schema with the help text, version line
//! and report style of the legacy command it replaces.

use shellfront_core::{Derivation, HelpText, OptionSchema, OptionSpec, OptionValue};

use crate::tool::{ReportStyle, ToolDefinition};

pub const CSSBEAUTIFY: &str = "cssbeautify";
pub const JSBEAUTIFY: &str = "jsbeautify";
pub const CSSMIN: &str = "cssmin";
pub const JSMIN: &str = "jsmin";
pub const JSLINT: &str = "jslint";
pub const JSHINT: &str = "jshint";

/// Names of every bundled tool, in listing order.
pub const TOOL_NAMES: &[&str] = &[CSSBEAUTIFY, JSBEAUTIFY, CSSMIN, JSMIN, JSLINT, JSHINT];

const INDENT_CHARS: &[(&str, &str)] = &[
    ("tab", "\t"),
    ("tabs", "\t"),
    ("space", " "),
    ("spaces", " "),
];

/// Largest accepted `--indent-size`.
pub const MAX_INDENT_SIZE: i64 = 64;

pub const JSLINT_EDITION: &str = "JSLint edition 2011-02-23";
pub const JSHINT_EDITION: &str = "JSHint edition 2011-02-23";

const REFORMAT_DESCRIPTION: &[&str] = &[
    "The content of filename will be reformatted and reindented.",
    "The result will be printed to standard output.",
];

const MINIFY_DESCRIPTION: &[&str] = &[
    "The content of filename will be minified and printed to",
    "standard output.",
];

const JSLINT_FLAGS: &[(&str, &str)] = &[
    ("adsafe", "if ADsafe rules should be enforced"),
    ("bitwise", "if bitwise operators should not be allowed"),
    ("browser", "if the standard browser globals should be predefined"),
    ("cap", "if upper case HTML should be allowed"),
    ("continue", "if the continuation statement should be tolerated"),
    ("css", "if CSS workarounds should be tolerated"),
    ("debug", "if debugger statements should be allowed"),
    ("devel", "if logging should be allowed (console, alert, etc.)"),
    ("eqeq", "if == should be allowed"),
    ("es5", "if ES5 syntax should be allowed"),
    ("evil", "if eval should be allowed"),
    ("forin", "if for in statements need not filter"),
    ("fragment", "if HTML fragments should be allowed"),
    ("newcap", "if constructor names capitalization is ignored"),
    ("node", "if Node.js globals should be predefined"),
    ("nomen", "if names may have dangling _"),
    ("on", "if HTML event handlers should be allowed"),
    ("passfail", "if the scan should stop on first error"),
    ("plusplus", "if increment/decrement should be allowed"),
    ("regexp", "if the . should be allowed in regexp literals"),
    ("rhino", "if the Rhino environment globals should be predefined"),
    ("undef", "if variables can be declared out of order"),
    ("unparam", "if unused parameters should be tolerated"),
    ("safe", "if use of some browser features should be restricted"),
    ("sloppy", "if the 'use strict'; pragma is optional"),
    ("sub", "if all forms of subscript notation are tolerated"),
    ("vars", "if multiple var statements per function should be allowed"),
    ("white", "if sloppy whitespace is tolerated"),
    ("widget", "if the Yahoo Widgets globals should be predefined"),
    ("windows", "if MS Windows-specific globals should be predefined"),
];

const JSHINT_FLAGS: &[(&str, &str)] = &[
    ("asi", "if automatic semicolon insertion should be tolerated"),
    ("bitwise", "if bitwise operators should not be allowed"),
    ("boss", "if advanced usage of assignments should be allowed"),
    ("browser", "if the standard browser globals should be predefined"),
    ("couch", "if CouchDB globals should be predefined"),
    ("curly", "if curly braces around blocks should be required"),
    ("debug", "if debugger statements should be allowed"),
    ("devel", "if logging globals should be predefined"),
    ("eqeqeq", "if === should be required"),
    ("eqnull", "if == null comparisons should be tolerated"),
    ("es5", "if ES5 syntax should be allowed"),
    ("evil", "if eval should be allowed"),
    ("expr", "if ExpressionStatement should be allowed as Programs"),
    ("forin", "if for in statements must filter"),
    ("immed", "if immediate invocations must be wrapped in parens"),
    ("jquery", "if jQuery globals should be predefined"),
    ("latedef", "if the use before definition should not be tolerated"),
    ("laxbreak", "if line breaks should not be checked"),
    ("loopfunc", "if functions should be allowed to be defined within loops"),
    ("newcap", "if constructor names must be capitalized"),
    ("noarg", "if arguments.caller and arguments.callee should be disallowed"),
    ("node", "if the Node.js environment globals should be predefined"),
    ("noempty", "if empty blocks should be disallowed"),
    ("nonew", "if using `new` for side-effects should be disallowed"),
    ("nomen", "if names should be checked"),
    ("onevar", "if only one var statement per function should be allowed"),
    ("passfail", "if the scan should stop on first error"),
    ("plusplus", "if increment/decrement should not be allowed"),
    ("regexp", "if the . should not be allowed in regexp literals"),
    ("rhino", "if the Rhino environment globals should be predefined"),
    ("undef", "if variables should be declared before used"),
    ("strict", "require the \"use strict\"; pragma"),
    ("sub", "if all forms of subscript notation are tolerated"),
    ("white", "if strict whitespace rules apply"),
];

/// Returns every bundled tool definition.
pub fn bundled_tools() -> Vec<ToolDefinition> {
    vec![
        cssbeautify(),
        jsbeautify(),
        cssmin(),
        jsmin(),
        jslint(),
        jshint(),
    ]
}

/// Looks up a bundled tool by command name.
pub fn find_tool(name: &str) -> Option<ToolDefinition> {
    match name {
        CSSBEAUTIFY => Some(cssbeautify()),
        JSBEAUTIFY => Some(jsbeautify()),
        CSSMIN => Some(cssmin()),
        JSMIN => Some(jsmin()),
        JSLINT => Some(jslint()),
        JSHINT => Some(jshint()),
        _ => None,
    }
}

pub fn cssbeautify() -> ToolDefinition {
    let schema = OptionSchema::new(CSSBEAUTIFY)
        .with_option(
            OptionSpec::char_choice(
                "indent-char",
                "character to indent with, could be tab or space (default is space)",
                INDENT_CHARS,
            )
            .with_default(OptionValue::from(" ")),
        )
        .with_option(
            OptionSpec::int("indent-size", "indentation size (default is 4)")
                .with_default(OptionValue::Int(4))
                .with_max(MAX_INDENT_SIZE),
        )
        .with_option(
            OptionSpec::choice(
                "open-brace",
                "define the placement of open curly brace, end-of-line (default) or separate-line",
                &["end-of-line", "separate-line"],
            )
            .stored_as("openbrace"),
        )
        .with_derivation(Derivation::indent("indent_char", "indent_size", "indent"));

    let help = HelpText {
        description: REFORMAT_DESCRIPTION,
        options_heading: Some("Formatting options:"),
        examples: &[
            "Example use of formatting options:",
            "   --open-brace=separate-line --indent-char=space",
            "",
            "which would indent the style with spaces (the default is 4),",
            "with the open curly brace placed in its own line.",
        ],
        footer: &["For more information, go to http://senchalabs.github.com/cssbeautify/."],
        ..HelpText::default()
    };

    ToolDefinition::new(schema, help, ReportStyle::Text)
}

pub fn jsbeautify() -> ToolDefinition {
    let schema = OptionSchema::new(JSBEAUTIFY)
        .with_option(OptionSpec::char_choice(
            "indent-char",
            "character to indent with, could be tab or space (default is space)",
            INDENT_CHARS,
        ))
        .with_option(
            OptionSpec::int("indent-size", "indentation size (default is 4)")
                .with_max(MAX_INDENT_SIZE),
        );

    let help = HelpText {
        description: REFORMAT_DESCRIPTION,
        options_heading: Some("Formatting options:"),
        examples: &[
            "Example use of formatting options:",
            "   --indent-char=space --indent-size=2",
            "",
            "which would format the code and indent with 2 spaces.",
        ],
        footer: &["For more information, go to http://jsbeautifier.org."],
        ..HelpText::default()
    };

    ToolDefinition::new(schema, help, ReportStyle::Text)
}

pub fn cssmin() -> ToolDefinition {
    let schema = OptionSchema::new(CSSMIN).with_version("cssmin.js from YUICompressor 2.4.6.");

    let help = HelpText {
        description: MINIFY_DESCRIPTION,
        version_description: Some("Display version number"),
        footer: &["For more information, go to http://www.phpied.com/yuicompressor-cssmin."],
        ..HelpText::default()
    };

    ToolDefinition::new(schema, help, ReportStyle::Text)
}

pub fn jsmin() -> ToolDefinition {
    let schema = OptionSchema::new(JSMIN)
        .with_version("jsmin.js edition 2010/01/15.")
        .with_option(OptionSpec::flag(
            "aggressive",
            "also remove line feeds where possible (level 3)",
        ))
        .with_option(OptionSpec::flag(
            "minimal",
            "keep line feeds, only strip comments and spaces (level 1)",
        ))
        .with_derivation(Derivation::Select {
            target: "level".to_string(),
            default: OptionValue::Int(2),
            choices: vec![
                ("aggressive".to_string(), OptionValue::Int(3)),
                ("minimal".to_string(), OptionValue::Int(1)),
            ],
        });

    let help = HelpText {
        description: MINIFY_DESCRIPTION,
        version_description: Some("Display version number"),
        options_heading: Some("JSMin options (see http://fmarcia.info/jsmin/test.html):"),
        column: 25,
        footer: &[
            "For more information, go to http://fmarcia.info/jsmin/test.html and",
            "http://www.crockford.com/javascript/jsmin.html.",
        ],
        ..HelpText::default()
    };

    ToolDefinition::new(schema, help, ReportStyle::Text)
}

pub fn jslint() -> ToolDefinition {
    let schema = lint_schema(JSLINT, JSLINT_EDITION, JSLINT_FLAGS)
        .with_option(
            OptionSpec::int("indent", "the indentation factor").with_default(OptionValue::Int(4)),
        )
        .with_option(OptionSpec::int("maxlen", "the maximum length of a source line"))
        .with_option(
            OptionSpec::int("maxerr", "the maximum number of warnings reported")
                .with_default(OptionValue::Int(1000)),
        )
        .with_option(OptionSpec::comma_list(
            "predef",
            "comma-separated names of predefined global variables",
        ));

    let help = HelpText {
        version_description: Some("Display JSLint edition"),
        options_heading: Some("JSLint options (see http://jslint.com/lint.html#options):"),
        column: 16,
        examples: &[
            "Example use of JSLint options:",
            "   --eqeq=true --continue=false --maxerr=100",
            "",
            "which would tolerate == and != but would not tolerate the use",
            "of continue statement and stop after encountering 100 errors.",
        ],
        footer: &[
            "For more information about JSLint, go to http://jslint.com.",
            "Copyright (c) 2002 Douglas Crockford  (www.JSLint.com).",
        ],
        ..HelpText::default()
    };

    ToolDefinition::new(
        schema,
        help,
        ReportStyle::Diagnostics {
            clean_message: "JSLint does not report any problem.",
        },
    )
}

pub fn jshint() -> ToolDefinition {
    let schema = lint_schema(JSHINT, JSHINT_EDITION, JSHINT_FLAGS)
        .with_option(OptionSpec::int("indent", "the indentation factor"))
        .with_option(OptionSpec::int("maxlen", "the maximum length of a source line"))
        .with_option(OptionSpec::int(
            "maxerr",
            "the maximum number of warnings reported",
        ))
        .with_option(OptionSpec::comma_list(
            "predef",
            "comma-separated names of predefined global variables",
        ));

    let help = HelpText {
        version_description: Some("Display JSHint edition"),
        options_heading: Some("JSHint options (see http://jshint.com/index.html#docs):"),
        general_column: Some(21),
        examples: &[
            "Example use of JSHint options:",
            "   --white=true --rhino=true --maxerr=42",
            "",
            "which would enforce whitespace rules and define Rhino",
            "environment globals and stop after encountering 42 errors.",
        ],
        footer: &["For more information about JSHint, go to http://jshint.com."],
        ..HelpText::default()
    };

    ToolDefinition::new(
        schema,
        help,
        ReportStyle::Diagnostics {
            clean_message: "JSHint does not report any problem.",
        },
    )
}

/// Lint options are stored under their own names, not snake-cased.
fn lint_schema(command: &str, version: &str, flags: &[(&str, &str)]) -> OptionSchema {
    flags.iter().fold(
        OptionSchema::new(command).with_version(version),
        |schema, (name, description)| {
            schema.with_option(OptionSpec::flag(name, description).stored_as(name))
        },
    )
}

#[cfg(test)]
mod tests {
    use shellfront_core::{ParseOutcome, parse_args, validate_schema};

    use super::*;

    fn ready(tool: &ToolDefinition, args: &[&str]) -> shellfront_core::Invocation {
        match parse_args(&tool.schema, args) {
            Ok(ParseOutcome::Ready(invocation)) => invocation,
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_bundled_schemas_validate() {
        for tool in bundled_tools() {
            let errors = validate_schema(&tool.schema);
            assert!(errors.is_empty(), "{}: {errors:?}", tool.name());
        }
    }

    #[test]
    fn test_names_match_definitions() {
        let names: Vec<String> = bundled_tools().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, TOOL_NAMES);
        for name in TOOL_NAMES {
            assert_eq!(find_tool(name).map(|t| t.name().to_string()).as_deref(), Some(*name));
        }
        assert!(find_tool("uglify").is_none());
    }

    #[test]
    fn test_cssbeautify_help_screen() {
        let expected = "\
Usage:
    cssbeautify [options] filename

The content of filename will be reformatted and reindented.
The result will be printed to standard output.

General options:
    --help          Show this help screen

Formatting options:
    --indent-char   character to indent with, could be tab or space (default is space)
    --indent-size   indentation size (default is 4)
    --open-brace    define the placement of open curly brace, end-of-line (default) or separate-line

Example use of formatting options:
   --open-brace=separate-line --indent-char=space

which would indent the style with spaces (the default is 4),
with the open curly brace placed in its own line.

For more information, go to http://senchalabs.github.com/cssbeautify/.

";
        assert_eq!(cssbeautify().render_help(), expected);
    }

    #[test]
    fn test_jslint_help_uses_narrow_column() {
        let help = jslint().render_help();
        assert!(help.contains("    --help      Show this help screen\n"));
        assert!(help.contains("    --version   Display JSLint edition\n"));
        assert!(help.contains("    --maxerr    the maximum number of warnings reported\n"));
        assert!(help.contains("    --continue  if the continuation statement should be tolerated\n"));
    }

    #[test]
    fn test_jshint_general_options_are_wider() {
        let help = jshint().render_help();
        assert!(help.contains("    --help           Show this help screen\n"));
        assert!(help.contains("    --version        Display JSHint edition\n"));
        assert!(help.contains("    --maxerr        the maximum number of warnings reported\n"));
    }

    #[test]
    fn test_version_lines() {
        let versions: Vec<Option<String>> =
            bundled_tools().into_iter().map(|t| t.schema.version).collect();
        assert_eq!(
            versions,
            vec![
                None,
                None,
                Some("cssmin.js from YUICompressor 2.4.6.".to_string()),
                Some("jsmin.js edition 2010/01/15.".to_string()),
                Some("JSLint edition 2011-02-23".to_string()),
                Some("JSHint edition 2011-02-23".to_string()),
            ]
        );
    }

    #[test]
    fn test_indent_size_is_bounded() {
        for tool in [cssbeautify(), jsbeautify()] {
            assert!(matches!(
                parse_args(&tool.schema, &["--indent-size=65", "a.css"]),
                Err(shellfront_core::UsageError::InvalidValue {
                    hint: shellfront_core::ValueHint::AtMost(MAX_INDENT_SIZE),
                    ..
                })
            ));
        }
        let invocation = ready(&cssbeautify(), &["--indent-size=64", "a.css"]);
        assert_eq!(invocation.options.get_str("indent").map(str::len), Some(64));
    }

    #[test]
    fn test_cssbeautify_indent_derivation() {
        let invocation = ready(
            &cssbeautify(),
            &["--indent-char=tab", "--indent-size=2", "file.css"],
        );
        assert_eq!(invocation.options.get_str("indent_char"), Some("\t"));
        assert_eq!(invocation.options.get_int("indent_size"), Some(2));
        assert_eq!(invocation.options.get_str("indent"), Some("\t\t"));
    }

    #[test]
    fn test_jsbeautify_has_no_defaults() {
        let invocation = ready(&jsbeautify(), &["app.js"]);
        assert!(invocation.options.is_empty());
    }

    #[test]
    fn test_jslint_defaults_and_predef() {
        let invocation = ready(&jslint(), &["--predef=window,$", "--white", "app.js"]);
        assert_eq!(invocation.options.get_int("indent"), Some(4));
        assert_eq!(invocation.options.get_int("maxerr"), Some(1000));
        assert_eq!(invocation.options.get_bool("white"), Some(true));
        let predef: Vec<&str> = invocation
            .options
            .get_list("predef")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(predef, vec!["$", "window"]);
    }

    #[test]
    fn test_jsmin_level() {
        assert_eq!(ready(&jsmin(), &["a.js"]).options.get_int("level"), Some(2));
        assert_eq!(
            ready(&jsmin(), &["--minimal", "a.js"]).options.get_int("level"),
            Some(1)
        );
    }

    #[test]
    fn test_cssmin_accepts_no_options() {
        assert!(matches!(
            parse_args(&cssmin().schema, &["--indent-size=2", "a.css"]),
            Err(shellfront_core::UsageError::UnknownOption { .. })
        ));
        assert_eq!(
            parse_args(&cssmin().schema, &["--version"]).unwrap(),
            ParseOutcome::ShowVersion("cssmin.js from YUICompressor 2.4.6.".into())
        );
    }
}
