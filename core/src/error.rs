//! Usage errors raised while turning argv into typed options.
//!
//! Every variant is fatal for the invocation: the dispatcher prints the
//! `Display` text followed by a blank line and exits with the usage code.

use std::fmt;

use thiserror::Error;

/// What an invalid option value was expected to be.
///
/// The `Display` impl renders the suffix appended to
/// `Invalid value for option --<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueHint {
    /// One of a declared set of literals.
    Choice,
    /// `true` or `false`.
    Boolean,
    /// A base-10 integer.
    Integer,
    /// A value is mandatory (e.g. a comma-separated list).
    Required,
    /// An integer no larger than the option's declared maximum.
    AtMost(i64),
    /// The value is a valid integer but too large to act on.
    TooLarge,
}

impl fmt::Display for ValueHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice | Self::Required => Ok(()),
            Self::Boolean => write!(f, ": must be true or false"),
            Self::Integer => write!(f, ": must be an integer"),
            Self::AtMost(max) => write!(f, ": must be at most {max}"),
            Self::TooLarge => write!(f, ": value is too large"),
        }
    }
}

/// Fatal conditions detected before any file access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The option is neither in the schema nor reserved.
    #[error("Unknown option: --{name}\nRun {command} --help to list all possible options.")]
    UnknownOption { command: String, name: String },

    /// The raw value could not be coerced to the option's kind.
    #[error("Invalid value for option --{name}{hint}.")]
    InvalidValue {
        name: String,
        value: Option<String>,
        hint: ValueHint,
    },

    /// A second positional token was seen.
    #[error("Please only specify one filename!")]
    MultipleFilenames,
}

impl UsageError {
    pub fn invalid_value(name: &str, value: Option<&str>, hint: ValueHint) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            value: value.map(String::from),
            hint,
        }
    }
}

/// Convenience alias for results with [`UsageError`].
pub type Result<T> = std::result::Result<T, UsageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_legacy_wording() {
        let unknown = UsageError::UnknownOption {
            command: "cssbeautify".into(),
            name: "bogus".into(),
        };
        assert_eq!(
            unknown.to_string(),
            "Unknown option: --bogus\nRun cssbeautify --help to list all possible options."
        );

        let choice = UsageError::invalid_value("open-brace", Some("middle"), ValueHint::Choice);
        assert_eq!(choice.to_string(), "Invalid value for option --open-brace.");

        let boolean = UsageError::invalid_value("eqeq", Some("yes"), ValueHint::Boolean);
        assert_eq!(
            boolean.to_string(),
            "Invalid value for option --eqeq: must be true or false."
        );

        let bounded = UsageError::invalid_value("indent-size", Some("1000"), ValueHint::AtMost(64));
        assert_eq!(
            bounded.to_string(),
            "Invalid value for option --indent-size: must be at most 64."
        );

        assert_eq!(
            UsageError::MultipleFilenames.to_string(),
            "Please only specify one filename!"
        );
    }
}
