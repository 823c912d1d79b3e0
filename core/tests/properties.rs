//! Property tests for the parse pass over a lint-style and a beautifier-style schema.

use proptest::prelude::*;
use shellfront_core::{
    Derivation, OptionSchema, OptionSpec, OptionValue, ParseOutcome, UsageError, ValueHint,
    parse_args,
};

const LINT_FLAGS: &[&str] = &["bitwise", "eqeq", "nomen", "white"];
const TAB_ALIASES: &[&str] = &["tab", "tabs"];
const SPACE_ALIASES: &[&str] = &["space", "spaces"];

fn lint_schema() -> OptionSchema {
    let mut schema = OptionSchema::new("jslint").with_version("JSLint edition test");
    for flag in LINT_FLAGS {
        schema = schema.with_option(OptionSpec::flag(flag, ""));
    }
    schema
        .with_option(OptionSpec::int("maxerr", "").with_default(OptionValue::Int(1000)))
        .with_option(OptionSpec::comma_list("predef", ""))
}

fn beautify_schema() -> OptionSchema {
    OptionSchema::new("cssbeautify")
        .with_option(
            OptionSpec::char_choice(
                "indent-char",
                "",
                &[("tab", "\t"), ("tabs", "\t"), ("space", " "), ("spaces", " ")],
            )
            .with_default(OptionValue::from(" ")),
        )
        .with_option(
            OptionSpec::int("indent-size", "")
                .with_default(OptionValue::Int(4))
                .with_max(64),
        )
        .with_option(
            OptionSpec::choice("open-brace", "", &["end-of-line", "separate-line"])
                .stored_as("openbrace"),
        )
        .with_derivation(Derivation::indent("indent_char", "indent_size", "indent"))
}

fn option_name() -> impl Strategy<Value = String> {
    "[a-z][a-z-]{0,12}"
}

fn known_arg() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(LINT_FLAGS).prop_map(|f| format!("--{f}")),
        (prop::sample::select(LINT_FLAGS), any::<bool>()).prop_map(|(f, b)| format!("--{f}={b}")),
        (0i64..5000).prop_map(|n| format!("--maxerr={n}")),
        "[a-z]{1,6}(,[a-z]{1,6}){0,3}".prop_map(|list| format!("--predef={list}")),
    ]
}

proptest! {
    #[test]
    fn unknown_options_are_rejected(name in option_name(), value in proptest::option::of("[a-z0-9]{0,6}")) {
        let schema = lint_schema();
        prop_assume!(schema.find(&name).is_none() && name != "help" && name != "version");

        let arg = match &value {
            Some(v) => format!("--{name}={v}"),
            None => format!("--{name}"),
        };
        let result = parse_args(&schema, &[arg.as_str(), "file.js"]);
        prop_assert_eq!(result, Err(UsageError::UnknownOption { command: "jslint".into(), name }));
    }

    #[test]
    fn booleans_accept_only_true_and_false(flag in prop::sample::select(LINT_FLAGS), raw in "[a-zA-Z0-9]{0,6}") {
        let arg = format!("--{flag}={raw}");
        let result = parse_args(&lint_schema(), &[arg.as_str(), "file.js"]);
        match raw.as_str() {
            "true" | "false" => {
                let ParseOutcome::Ready(invocation) = result.unwrap() else {
                    return Err(TestCaseError::fail("expected a ready invocation"));
                };
                prop_assert_eq!(invocation.options.get_bool(flag), Some(raw == "true"));
            }
            _ => prop_assert_eq!(
                result,
                Err(UsageError::invalid_value(flag, Some(raw.as_str()), ValueHint::Boolean))
            ),
        }
    }

    #[test]
    fn synonyms_share_a_canonical_value(tab in prop::sample::select(TAB_ALIASES), space in prop::sample::select(SPACE_ALIASES)) {
        let schema = beautify_schema();
        let char_of = |alias: &str| {
            let arg = format!("--indent-char={alias}");
            match parse_args(&schema, &[arg.as_str(), "a.css"]) {
                Ok(ParseOutcome::Ready(invocation)) => invocation.options.get_str("indent_char").map(String::from),
                _ => None,
            }
        };
        prop_assert_eq!(char_of(tab), Some("\t".to_string()));
        prop_assert_eq!(char_of(space), Some(" ".to_string()));
    }

    #[test]
    fn two_positionals_always_fail(
        options in prop::collection::vec(known_arg(), 0..4),
        split in 0usize..4,
        files in prop::collection::vec("[a-z]{1,8}\\.js", 2..4),
    ) {
        let mut args = options;
        let split = split.min(args.len());
        args.insert(split, files[0].clone());
        args.extend(files[1..].iter().cloned());

        prop_assert_eq!(parse_args(&lint_schema(), &args), Err(UsageError::MultipleFilenames));
    }

    #[test]
    fn parsing_is_idempotent(options in prop::collection::vec(known_arg(), 0..6), file in "[a-z]{1,8}\\.js") {
        let mut args = options;
        args.push(file);
        let schema = lint_schema();
        prop_assert_eq!(parse_args(&schema, &args), parse_args(&schema, &args));
    }
}
