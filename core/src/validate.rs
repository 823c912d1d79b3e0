//! Schema self-validation.
//!
//! Catches structural mistakes in a tool's option declaration (reserved or
//! duplicate names, empty choice sets, mistyped defaults, derivations that
//! point nowhere) before they surface as confusing runtime behaviour.
//!
//! # Examples
//!
//! ```
//! use shellfront_core::*;
//!
//! let schema = OptionSchema::new("jslint").with_option(OptionSpec::flag("eqeq", ""));
//! assert!(validate_schema(&schema).is_empty());
//!
//! // Invalid: `help` is reserved by every schema
//! let bad = OptionSchema::new("jslint").with_option(OptionSpec::flag("help", ""));
//! assert!(!validate_schema(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{
    Derivation, HELP_OPTION, OptionSchema, OptionSpec, OptionValue, VERSION_OPTION, ValueKind,
};

/// Schema validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Command name is empty or whitespace-only.
    #[error("schema command cannot be empty")]
    EmptyCommandName,
    /// Option name is not lowercase kebab-case (e.g. `indent_char`, `Foo`).
    #[error("invalid option name: {0:?}")]
    InvalidOptionName(String),
    /// Option name collides with `help` or, when a version is declared, `version`.
    #[error("option name is reserved: {0}")]
    ReservedOptionName(String),
    /// Two options share a name.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
    /// Two options store into the same key.
    #[error("duplicate storage key: {0}")]
    DuplicateKey(String),
    /// An enum option allows no values.
    #[error("option {0} declares no allowed values")]
    EmptyChoices(String),
    /// The declared default cannot be produced by the option's kind.
    #[error("default for option {0} does not match its kind")]
    DefaultKindMismatch(String),
    /// A derivation reads a key no option stores into.
    #[error("derivation {target} reads unknown key {key}")]
    UnknownDerivationKey { target: String, key: String },
    /// A derivation writes over an option's key.
    #[error("derivation target {0} overwrites an option")]
    DerivationShadowsOption(String),
    /// A repeat derivation reads its size from an option without a maximum.
    #[error("derivation {target} repeats by {key}, which declares no maximum")]
    UnboundedRepeat { target: String, key: String },
}

/// Validates an option schema.
///
/// Returns every problem found, in declaration order.
pub fn validate_schema(schema: &OptionSchema) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if schema.command.trim().is_empty() {
        errors.push(SchemaError::EmptyCommandName);
    }

    let mut names = HashSet::new();
    let mut keys = HashSet::new();
    for option in &schema.options {
        let name = option.name.as_str();
        if !is_kebab_case(name) {
            errors.push(SchemaError::InvalidOptionName(name.to_string()));
        }
        if name == HELP_OPTION || (name == VERSION_OPTION && schema.has_version()) {
            errors.push(SchemaError::ReservedOptionName(name.to_string()));
        }
        if !names.insert(name) {
            errors.push(SchemaError::DuplicateOption(name.to_string()));
        }
        if !keys.insert(option.key.as_str()) {
            errors.push(SchemaError::DuplicateKey(option.key.clone()));
        }
        errors.extend(validate_kind(option));
    }

    for derivation in &schema.derivations {
        let target = derivation.target();
        if keys.contains(target) {
            errors.push(SchemaError::DerivationShadowsOption(target.to_string()));
        }
        let inputs: Vec<&str> = match derivation {
            Derivation::RepeatChar {
                char_key, size_key, ..
            } => vec![char_key.as_str(), size_key.as_str()],
            Derivation::Select { choices, .. } => {
                choices.iter().map(|(key, _)| key.as_str()).collect()
            }
        };
        for key in inputs {
            if !keys.contains(key) {
                errors.push(SchemaError::UnknownDerivationKey {
                    target: target.to_string(),
                    key: key.to_string(),
                });
            }
        }
        if let Derivation::RepeatChar { size_key, .. } = derivation {
            let size_option = schema.options.iter().find(|o| &o.key == size_key);
            if size_option.is_some_and(|o| o.max.is_none()) {
                errors.push(SchemaError::UnboundedRepeat {
                    target: target.to_string(),
                    key: size_key.clone(),
                });
            }
        }
    }

    errors
}

fn validate_kind(option: &OptionSpec) -> Option<SchemaError> {
    let empty = match &option.kind {
        ValueKind::Enum(allowed) => allowed.is_empty(),
        ValueKind::CharEnum(aliases) => aliases.is_empty(),
        _ => false,
    };
    if empty {
        return Some(SchemaError::EmptyChoices(option.name.clone()));
    }

    let default = option.default.as_ref()?;
    let fits = match (&option.kind, default) {
        (ValueKind::Flag, OptionValue::Bool(_)) => true,
        (ValueKind::Int, OptionValue::Int(_)) => true,
        (ValueKind::Enum(allowed), OptionValue::Str(s)) => allowed.contains(s),
        (ValueKind::CharEnum(aliases), OptionValue::Str(s)) => {
            aliases.iter().any(|a| &a.literal == s)
        }
        (ValueKind::CommaList, OptionValue::List(_)) => true,
        (ValueKind::FreeString, OptionValue::Str(_) | OptionValue::Bool(true)) => true,
        _ => false,
    };
    (!fits).then(|| SchemaError::DefaultKindMismatch(option.name.clone()))
}

fn is_kebab_case(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
