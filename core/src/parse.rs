//! The parse pass: argv in, typed options and a single filename out.
//!
//! Tokens are applied in order to an [`OptionsAccumulator`]. Help and
//! version requests short-circuit at their position in the argument list;
//! usage errors short-circuit with a [`UsageError`]. Once every token has
//! been applied the schema's derivations run exactly once and the options
//! are frozen into an [`Invocation`].

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::coerce::coerce;
use crate::error::{Result, UsageError, ValueHint};
use crate::token::tokenize;
use crate::types::{
    Derivation, HELP_OPTION, OptionSchema, OptionSpec, OptionValue, VERSION_OPTION,
};

/// Typed options keyed by storage key.
///
/// Only the parse pass can mutate it; consumers receive a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedOptions {
    values: BTreeMap<String, OptionValue>,
}

impl NormalizedOptions {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(OptionValue::as_int)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    pub fn get_list(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.get(key).and_then(OptionValue::as_list)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, key: &str, value: OptionValue) {
        self.values.insert(key.to_string(), value);
    }
}

/// Why the help screen is being shown instead of running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpReason {
    /// `--help` appeared in the argument list.
    Requested,
    /// The argument list was empty.
    NoArguments,
    /// Options were given but no filename.
    NoFilename,
}

/// A fully parsed invocation, ready for the file to be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub options: NormalizedOptions,
    pub filename: String,
}

/// Terminal result of the parse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Ready(Invocation),
    ShowHelp(HelpReason),
    /// `--version` was given; carries the line to print.
    ShowVersion(String),
}

/// Mutable state of one parse pass.
///
/// Seeded with the schema's defaults; records the order in which keys were
/// assigned so [`Derivation::Select`] can honour "last one wins".
#[derive(Debug)]
pub struct OptionsAccumulator<'s> {
    schema: &'s OptionSchema,
    options: NormalizedOptions,
    filename: Option<String>,
    assigned_at: BTreeMap<String, usize>,
    next_position: usize,
}

impl<'s> OptionsAccumulator<'s> {
    pub fn new(schema: &'s OptionSchema) -> Self {
        let mut options = NormalizedOptions::default();
        for spec in &schema.options {
            if let Some(default) = &spec.default {
                options.insert(&spec.key, default.clone());
            }
        }
        Self {
            schema,
            options,
            filename: None,
            assigned_at: BTreeMap::new(),
            next_position: 0,
        }
    }

    /// Stores a coerced value, overriding any default or earlier token.
    pub fn assign(&mut self, spec: &OptionSpec, value: OptionValue) {
        self.options.insert(&spec.key, value);
        self.assigned_at.insert(spec.key.clone(), self.next_position);
        self.next_position += 1;
    }

    /// Fills the single filename slot.
    pub fn set_filename(&mut self, filename: &str) -> Result<()> {
        if self.filename.is_some() {
            return Err(UsageError::MultipleFilenames);
        }
        self.filename = Some(filename.to_string());
        Ok(())
    }

    /// Runs the derivations and freezes the options.
    ///
    /// Returns `Ok(None)` when no filename was given.
    pub fn finish(mut self) -> Result<Option<Invocation>> {
        let Some(filename) = self.filename.take() else {
            return Ok(None);
        };
        let schema = self.schema;
        for derivation in &schema.derivations {
            let value = self.derive(derivation)?;
            debug!(target_key = derivation.target(), ?value, "derived option");
            self.options.insert(derivation.target(), value);
        }
        Ok(Some(Invocation {
            options: self.options,
            filename,
        }))
    }

    fn derive(&self, derivation: &Derivation) -> Result<OptionValue> {
        match derivation {
            Derivation::RepeatChar {
                char_key,
                size_key,
                default_char,
                default_size,
                ..
            } => {
                let unit = self.options.get_str(char_key).unwrap_or(default_char.as_str());
                let size = self.options.get_int(size_key).unwrap_or(*default_size);
                self.repeat(unit, size, size_key).map(OptionValue::Str)
            }
            Derivation::Select {
                default, choices, ..
            } => Ok(choices
                .iter()
                .filter(|(key, _)| self.options.get_bool(key) == Some(true))
                .filter_map(|(key, value)| self.assigned_at.get(key).map(|pos| (*pos, value)))
                .max_by_key(|(pos, _)| *pos)
                .map(|(_, value)| value.clone())
                .unwrap_or_else(|| default.clone())),
        }
    }

    /// `unit` repeated `size` times, or a usage error naming the size option
    /// when the string cannot be allocated.
    fn repeat(&self, unit: &str, size: i64, size_key: &str) -> Result<String> {
        let count = usize::try_from(size).unwrap_or(0);
        let mut repeated = String::new();
        let reserved = unit
            .len()
            .checked_mul(count)
            .and_then(|len| repeated.try_reserve_exact(len).ok());
        if reserved.is_none() {
            let name = self
                .schema
                .options
                .iter()
                .find(|o| o.key == size_key)
                .map_or(size_key, |o| o.name.as_str());
            return Err(UsageError::invalid_value(
                name,
                Some(size.to_string().as_str()),
                ValueHint::TooLarge,
            ));
        }
        for _ in 0..count {
            repeated.push_str(unit);
        }
        Ok(repeated)
    }
}

/// Parses a complete argument list against a schema.
///
/// The program name must not be included in `args`.
///
/// # Examples
///
/// ```
/// use shellfront_core::*;
///
/// let schema = OptionSchema::new("cssbeautify")
///     .with_option(OptionSpec::char_choice("indent-char", "", &[("tab", "\t"), ("space", " ")]))
///     .with_option(OptionSpec::int("indent-size", ""))
///     .with_derivation(Derivation::indent("indent_char", "indent_size", "indent"));
///
/// let outcome = parse_args(&schema, &["--indent-char=tab", "--indent-size=2", "file.css"]).unwrap();
/// let ParseOutcome::Ready(invocation) = outcome else { panic!("expected a ready invocation") };
/// assert_eq!(invocation.filename, "file.css");
/// assert_eq!(invocation.options.get_str("indent"), Some("\t\t"));
///
/// assert_eq!(parse_args(&schema, &[] as &[&str]).unwrap(), ParseOutcome::ShowHelp(HelpReason::NoArguments));
/// assert!(parse_args(&schema, &["--bogus", "file.css"]).is_err());
/// ```
pub fn parse_args<S: AsRef<str>>(schema: &OptionSchema, args: &[S]) -> Result<ParseOutcome> {
    if args.is_empty() {
        return Ok(ParseOutcome::ShowHelp(HelpReason::NoArguments));
    }

    let mut acc = OptionsAccumulator::new(schema);
    for arg in args {
        let token = tokenize(arg.as_ref());
        debug!(arg = arg.as_ref(), ?token, "classified argument");

        let Some(name) = token.name() else {
            acc.set_filename(arg.as_ref())?;
            continue;
        };
        let raw = token.raw_value();

        if name == HELP_OPTION {
            return Ok(ParseOutcome::ShowHelp(HelpReason::Requested));
        }
        if name == VERSION_OPTION {
            if let Some(version) = &schema.version {
                return Ok(ParseOutcome::ShowVersion(version.clone()));
            }
        }

        let spec = schema
            .find(name)
            .ok_or_else(|| UsageError::UnknownOption {
                command: schema.command.clone(),
                name: name.to_string(),
            })?;
        let value = coerce(spec, raw)?;
        acc.assign(spec, value);
    }

    Ok(match acc.finish()? {
        Some(invocation) => ParseOutcome::Ready(invocation),
        None => ParseOutcome::ShowHelp(HelpReason::NoFilename),
    })
}
