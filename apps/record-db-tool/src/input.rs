//! Parsing of command-line text into typed values.

use anyhow::{anyhow, bail, Context, Result};
use record_db_core::{FieldType, Value};

/// Parses raw text into a value of the shape `ty` expects.
///
/// Numbers and intervals are parsed here; textual types are passed through
/// verbatim and checked by the store itself.
pub fn parse_value(ty: FieldType, raw: &str) -> Result<Value> {
    let value = match ty {
        FieldType::Integer => Value::Integer(
            raw.trim()
                .parse()
                .with_context(|| format!("'{}' is not an integer", raw))?,
        ),
        FieldType::Real => Value::Real(
            raw.trim()
                .parse()
                .with_context(|| format!("'{}' is not a real number", raw))?,
        ),
        FieldType::IntegerInterval => {
            let (a, b) = parse_interval(raw)?;
            Value::IntegerInterval(a, b)
        }
        FieldType::Char | FieldType::String => Value::String(raw.to_string()),
        FieldType::FilePath => Value::FilePath(raw.to_string()),
    };
    Ok(value)
}

/// Parses `(a, b)` or `a,b` into two integers.
fn parse_interval(raw: &str) -> Result<(i64, i64)> {
    let trimmed = raw.trim();
    let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
        (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
        (None, None) => trimmed,
        _ => bail!("'{}' has unbalanced parentheses", raw),
    };
    let parts: Vec<&str> = inner.split(',').collect();
    let [a, b] = parts.as_slice() else {
        bail!("'{}' is not an interval of two integers", raw);
    };
    let parse = |s: &str| {
        s.trim()
            .parse::<i64>()
            .map_err(|_| anyhow!("'{}' in interval '{}' is not an integer", s.trim(), raw))
    };
    Ok((parse(*a)?, parse(*b)?))
}
