//! Option schema type definitions.
//!
//! This module defines the static data model a front end declares once at
//! startup: which long options it recognizes, how their raw string values are
//! coerced, what they default to, and which composite values are derived from
//! them after parsing. The types serialize with [`serde`] so a tool's
//! vocabulary can be exported for documentation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Option name reserved by every schema for the help screen.
pub const HELP_OPTION: &str = "help";

/// Option name reserved for schemas that declare a version line.
pub const VERSION_OPTION: &str = "version";

/// A synonym accepted by a [`ValueKind::CharEnum`] option and the literal it
/// is stored as.
///
/// # Examples
///
/// ```
/// use shellfront_core::CharAlias;
///
/// let tab = CharAlias::new("tabs", "\t");
/// assert_eq!(tab.alias, "tabs");
/// assert_eq!(tab.literal, "\t");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharAlias {
    /// Spelling accepted on the command line (e.g. `tab`).
    pub alias: String,
    /// Literal stored in the normalized options (e.g. `"\t"`).
    pub literal: String,
}

impl CharAlias {
    pub fn new(alias: &str, literal: &str) -> Self {
        Self {
            alias: alias.to_string(),
            literal: literal.to_string(),
        }
    }
}

/// How the raw string of an option is turned into a typed value.
///
/// # Examples
///
/// ```
/// use shellfront_core::ValueKind;
///
/// let braces = ValueKind::Enum(vec!["end-of-line".into(), "separate-line".into()]);
/// assert_eq!(braces.resolve_choice("separate-line"), Some("separate-line"));
/// assert_eq!(braces.resolve_choice("middle"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `true` / `false`; a bare `--name` means `true`.
    Flag,
    /// Base-10 integer.
    Int,
    /// One of a fixed set of literals, stored verbatim.
    Enum(Vec<String>),
    /// One of a set of synonyms, stored as the literal it maps to.
    CharEnum(Vec<CharAlias>),
    /// Comma-separated list, stored as a set.
    CommaList,
    /// Any string, stored verbatim; a bare `--name` means `true`.
    FreeString,
}

impl ValueKind {
    /// Maps a raw choice to the literal it is stored as: the member itself
    /// for an [`Enum`](ValueKind::Enum), the aliased literal for a
    /// [`CharEnum`](ValueKind::CharEnum). `None` for anything else.
    pub fn resolve_choice(&self, value: &str) -> Option<&str> {
        match self {
            Self::Enum(allowed) => allowed.iter().find(|a| *a == value).map(String::as_str),
            Self::CharEnum(aliases) => aliases
                .iter()
                .find(|a| a.alias == value)
                .map(|a| a.literal.as_str()),
            _ => None,
        }
    }

    /// Short lowercase label used in schema listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Int => "int",
            Self::Enum(_) => "enum",
            Self::CharEnum(_) => "char-enum",
            Self::CommaList => "comma-list",
            Self::FreeString => "string",
        }
    }
}

/// A typed option value after coercion.
///
/// # Examples
///
/// ```
/// use shellfront_core::OptionValue;
///
/// assert_eq!(OptionValue::from(true).as_bool(), Some(true));
/// assert_eq!(OptionValue::from(4).as_int(), Some(4));
/// assert_eq!(OptionValue::from("\t").as_str(), Some("\t"));
/// assert_eq!(OptionValue::from(4).as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(BTreeSet<String>),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Descriptor of one recognized long option.
///
/// Use the constructors ([`flag`](OptionSpec::flag), [`int`](OptionSpec::int),
/// [`choice`](OptionSpec::choice), [`char_choice`](OptionSpec::char_choice),
/// [`comma_list`](OptionSpec::comma_list),
/// [`free_string`](OptionSpec::free_string)) and chain
/// [`with_default`](OptionSpec::with_default),
/// [`with_max`](OptionSpec::with_max) or [`stored_as`](OptionSpec::stored_as).
///
/// # Examples
///
/// ```
/// use shellfront_core::{OptionSpec, OptionValue, ValueKind};
///
/// let size = OptionSpec::int("indent-size", "indentation size (default is 4)")
///     .with_default(OptionValue::Int(4))
///     .with_max(64);
/// assert_eq!(size.key, "indent_size");
/// assert_eq!(size.kind, ValueKind::Int);
/// assert_eq!(size.max, Some(64));
///
/// let brace = OptionSpec::choice("open-brace", "brace placement", &["end-of-line", "separate-line"])
///     .stored_as("openbrace");
/// assert_eq!(brace.key, "openbrace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Kebab-case name as written after `--`.
    pub name: String,
    /// Key under which the coerced value is stored.
    pub key: String,
    /// One-line description shown on the help screen.
    pub description: String,
    pub kind: ValueKind,
    /// Value present in the normalized options before any token is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<OptionValue>,
    /// Largest value an [`Int`](ValueKind::Int) option accepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

impl OptionSpec {
    /// Creates a descriptor whose storage key is the name with `-` replaced
    /// by `_`.
    pub fn new(name: &str, description: &str, kind: ValueKind) -> Self {
        Self {
            name: name.to_string(),
            key: name.replace('-', "_"),
            description: description.to_string(),
            kind,
            default: None,
            max: None,
        }
    }

    pub fn flag(name: &str, description: &str) -> Self {
        Self::new(name, description, ValueKind::Flag)
    }

    pub fn int(name: &str, description: &str) -> Self {
        Self::new(name, description, ValueKind::Int)
    }

    pub fn choice(name: &str, description: &str, allowed: &[&str]) -> Self {
        let allowed = allowed.iter().map(|s| s.to_string()).collect();
        Self::new(name, description, ValueKind::Enum(allowed))
    }

    /// Creates a synonym-mapping option from `(alias, literal)` pairs.
    pub fn char_choice(name: &str, description: &str, aliases: &[(&str, &str)]) -> Self {
        let aliases = aliases
            .iter()
            .map(|(alias, literal)| CharAlias::new(alias, literal))
            .collect();
        Self::new(name, description, ValueKind::CharEnum(aliases))
    }

    pub fn comma_list(name: &str, description: &str) -> Self {
        Self::new(name, description, ValueKind::CommaList)
    }

    pub fn free_string(name: &str, description: &str) -> Self {
        Self::new(name, description, ValueKind::FreeString)
    }

    pub fn with_default(mut self, value: OptionValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Caps an integer option; larger values are rejected during coercion.
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Overrides the storage key.
    pub fn stored_as(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }
}

/// A composite value computed once from the normalized options after the
/// parse pass completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Derivation {
    /// `target` = the string at `char_key` repeated `size_key` times.
    ///
    /// Missing keys fall back to `default_char` / `default_size`; a size of
    /// zero or less yields an empty string. The size option should declare a
    /// maximum (see [`OptionSpec::with_max`]).
    RepeatChar {
        char_key: String,
        size_key: String,
        default_char: String,
        default_size: i64,
        target: String,
    },
    /// `target` = the value paired with whichever choice flag was set to
    /// `true` most recently on the command line, or `default` if none was.
    Select {
        target: String,
        default: OptionValue,
        choices: Vec<(String, OptionValue)>,
    },
}

impl Derivation {
    /// The indent-string derivation shared by the beautifiers.
    pub fn indent(char_key: &str, size_key: &str, target: &str) -> Self {
        Self::RepeatChar {
            char_key: char_key.to_string(),
            size_key: size_key.to_string(),
            default_char: " ".to_string(),
            default_size: 4,
            target: target.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::RepeatChar { target, .. } | Self::Select { target, .. } => target,
        }
    }
}

/// Complete option schema for one front end.
///
/// Immutable once built; passed by reference into the parser and help
/// renderer.
///
/// # Examples
///
/// ```
/// use shellfront_core::{OptionSchema, OptionSpec};
///
/// let schema = OptionSchema::new("jsmin")
///     .with_version("jsmin.js edition 2010/01/15.")
///     .with_option(OptionSpec::flag("aggressive", "level 3"))
///     .with_option(OptionSpec::flag("minimal", "level 1"));
///
/// assert!(schema.find("minimal").is_some());
/// assert!(schema.find("help").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSchema {
    /// Command name used in diagnostics (e.g. `cssbeautify`).
    pub command: String,
    /// Line printed for `--version`; `None` makes `version` an unknown option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Recognized options in help-screen order.
    pub options: Vec<OptionSpec>,
    /// Post-parse composite values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derivations: Vec<Derivation>,
}

impl OptionSchema {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivations.push(derivation);
        self
    }

    /// Finds an option by its command-line name.
    pub fn find(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Returns true if `--version` is recognized.
    pub fn has_version(&self) -> bool {
        self.version.is_some()
    }
}
