//! Conversion of raw option strings into typed values.

use tracing::debug;

use crate::error::{Result, UsageError, ValueHint};
use crate::types::{OptionSpec, OptionValue, ValueKind};

/// Coerces the raw value of one option according to its declared kind.
///
/// `raw` is `None` for the bare `--name` form.
///
/// # Examples
///
/// ```
/// use shellfront_core::{OptionSpec, OptionValue, coerce};
///
/// let eqeq = OptionSpec::flag("eqeq", "tolerate == and !=");
/// assert_eq!(coerce(&eqeq, None).unwrap(), OptionValue::Bool(true));
/// assert_eq!(coerce(&eqeq, Some("false")).unwrap(), OptionValue::Bool(false));
/// assert!(coerce(&eqeq, Some("yes")).is_err());
/// ```
pub fn coerce(spec: &OptionSpec, raw: Option<&str>) -> Result<OptionValue> {
    let value = match &spec.kind {
        ValueKind::Flag => coerce_bool(spec, raw)?,
        ValueKind::Int => coerce_int(spec, raw)?,
        ValueKind::Enum(_) | ValueKind::CharEnum(_) => {
            match raw.and_then(|value| spec.kind.resolve_choice(value)) {
                Some(literal) => OptionValue::from(literal),
                None => return Err(invalid(spec, raw, ValueHint::Choice)),
            }
        }
        ValueKind::CommaList => match raw {
            Some(value) => OptionValue::List(value.split(',').map(String::from).collect()),
            None => return Err(invalid(spec, raw, ValueHint::Required)),
        },
        ValueKind::FreeString => match raw {
            Some(value) => OptionValue::from(value),
            None => OptionValue::Bool(true),
        },
    };

    debug!(option = %spec.name, ?raw, ?value, "coerced option value");
    Ok(value)
}

fn coerce_bool(spec: &OptionSpec, raw: Option<&str>) -> Result<OptionValue> {
    match raw.unwrap_or("true") {
        "true" => Ok(OptionValue::Bool(true)),
        "false" => Ok(OptionValue::Bool(false)),
        _ => Err(invalid(spec, raw, ValueHint::Boolean)),
    }
}

fn coerce_int(spec: &OptionSpec, raw: Option<&str>) -> Result<OptionValue> {
    let value = raw
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| invalid(spec, raw, ValueHint::Integer))?;
    match spec.max {
        Some(max) if value > max => Err(invalid(spec, raw, ValueHint::AtMost(max))),
        _ => Ok(OptionValue::Int(value)),
    }
}

fn invalid(spec: &OptionSpec, raw: Option<&str>, hint: ValueHint) -> UsageError {
    UsageError::invalid_value(&spec.name, raw, hint)
}
