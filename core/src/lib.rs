//! Declarative option schemas for single-file command-line front ends.
//!
//! A front end declares its vocabulary once as an [`OptionSchema`] and this
//! crate does the rest of the argument handling:
//!
//! - [`tokenize`]: classify one argv entry as `--name=value`, `--name`, or a
//!   positional filename.
//! - [`coerce`]: turn a raw string into a typed [`OptionValue`] according to
//!   the option's [`ValueKind`].
//! - [`parse_args`]: run the whole parse pass, enforcing the single-filename
//!   rule and applying [`Derivation`]s, producing a [`ParseOutcome`] or a
//!   [`UsageError`].
//! - [`render_help`]: format the schema into an aligned help screen wrapped
//!   in the tool's static [`HelpText`].
//! - [`validate_schema`]: check a schema for structural mistakes.
//!
//! Nothing here touches the filesystem or the process; reading the input and
//! running the engine is the job of the runner crate.
//!
//! # Example
//!
//! ```
//! use shellfront_core::*;
//!
//! let schema = OptionSchema::new("jslint")
//!     .with_option(OptionSpec::flag("eqeq", "tolerate == and !="))
//!     .with_option(OptionSpec::int("maxerr", "maximum number of warnings").with_default(OptionValue::Int(1000)))
//!     .with_option(OptionSpec::comma_list("predef", "predefined globals").stored_as("predef"));
//! assert!(validate_schema(&schema).is_empty());
//!
//! let outcome = parse_args(&schema, &["--eqeq", "--predef=window,document", "app.js"]).unwrap();
//! let ParseOutcome::Ready(invocation) = outcome else { unreachable!() };
//! assert_eq!(invocation.options.get_bool("eqeq"), Some(true));
//! assert_eq!(invocation.options.get_int("maxerr"), Some(1000));
//! assert_eq!(invocation.options.get_list("predef").map(|s| s.len()), Some(2));
//! ```

mod coerce;
mod error;
mod help;
mod parse;
mod token;
mod types;
mod validate;

pub use coerce::coerce;
pub use error::{UsageError, ValueHint};
pub use help::{HelpText, option_line, render_help};
pub use parse::{
    HelpReason, Invocation, NormalizedOptions, OptionsAccumulator, ParseOutcome, parse_args,
};
pub use token::{RawToken, tokenize};
pub use types::*;
pub use validate::{SchemaError, validate_schema};
