//! Classification of single argv entries.

/// One argv entry after classification.
///
/// The option name is only representable on the long-option variants, so a
/// positional token can never carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// `--name=value`; split on the first `=`.
    LongOptionWithValue { name: &'a str, value: &'a str },
    /// `--name`
    LongOptionFlag { name: &'a str },
    /// Anything else, including `-x`, `--` and the empty string.
    Positional(&'a str),
}

impl<'a> RawToken<'a> {
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Self::LongOptionWithValue { name, .. } | Self::LongOptionFlag { name } => Some(name),
            Self::Positional(_) => None,
        }
    }

    pub fn raw_value(&self) -> Option<&'a str> {
        match *self {
            Self::LongOptionWithValue { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Classifies one argv entry.
///
/// # Examples
///
/// ```
/// use shellfront_core::{RawToken, tokenize};
///
/// assert_eq!(
///     tokenize("--predef=a=b,c"),
///     RawToken::LongOptionWithValue { name: "predef", value: "a=b,c" }
/// );
/// assert_eq!(tokenize("--help"), RawToken::LongOptionFlag { name: "help" });
/// assert_eq!(tokenize("--"), RawToken::Positional("--"));
/// assert_eq!(tokenize("style.css"), RawToken::Positional("style.css"));
/// ```
pub fn tokenize(arg: &str) -> RawToken<'_> {
    let Some(option) = arg.strip_prefix("--").filter(|rest| !rest.is_empty()) else {
        return RawToken::Positional(arg);
    };

    match option.split_once('=') {
        Some((name, value)) => RawToken::LongOptionWithValue { name, value },
        None => RawToken::LongOptionFlag { name: option },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_split_on_first_equals() {
        let token = tokenize("--indent-char==tab");
        assert_eq!(token.name(), Some("indent-char"));
        assert_eq!(token.raw_value(), Some("=tab"));
    }

    #[test]
    fn test_empty_value_is_still_a_value() {
        assert_eq!(
            tokenize("--predef="),
            RawToken::LongOptionWithValue {
                name: "predef",
                value: ""
            }
        );
    }

    #[test]
    fn test_short_and_bare_forms_are_positional() {
        for arg in ["-v", "--", "-", "", "file.js", "-=x"] {
            assert_eq!(tokenize(arg), RawToken::Positional(arg));
            assert_eq!(tokenize(arg).name(), None);
        }
    }

    #[test]
    fn test_leading_equals_yields_empty_name() {
        assert_eq!(
            tokenize("--=x"),
            RawToken::LongOptionWithValue { name: "", value: "x" }
        );
    }
}
