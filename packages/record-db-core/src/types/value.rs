//! Typed field values.

use std::borrow::Cow;
use std::fmt;

use super::FieldType;

/// Value held by a field.
///
/// Each variant corresponds to exactly one [`FieldType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer
    Integer(i64),
    /// 64-bit floating point number
    Real(f64),
    /// Single character
    Char(char),
    /// UTF-8 string
    String(String),
    /// Path text
    FilePath(String),
    /// Pair of signed integers
    IntegerInterval(i64, i64),
}

impl Value {
    /// Returns the type of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Integer(_) => FieldType::Integer,
            Value::Real(_) => FieldType::Real,
            Value::Char(_) => FieldType::Char,
            Value::String(_) => FieldType::String,
            Value::FilePath(_) => FieldType::FilePath,
            Value::IntegerInterval(_, _) => FieldType::IntegerInterval,
        }
    }

    /// Returns the inner integer if this is a [`Value::Integer`].
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the inner float if this is a [`Value::Real`].
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the text of a [`Value::String`] or [`Value::FilePath`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::FilePath(s) => Some(s),
            _ => None,
        }
    }

    /// Returns both bounds if this is a [`Value::IntegerInterval`].
    pub fn as_interval(&self) -> Option<(i64, i64)> {
        match self {
            Value::IntegerInterval(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    /// Compares two values the way intersection matches them.
    ///
    /// `Char`, `String` and `FilePath` compare as plain text, and an
    /// `Integer` equals a `Real` holding exactly the same number. Every other
    /// pair must share a type and be equal.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(i), Value::Real(r)) | (Value::Real(r), Value::Integer(i)) => {
                integer_equals_real(*i, *r)
            }
            (a, b) if a.field_type().is_textual() && b.field_type().is_textual() => {
                a.text() == b.text()
            }
            (a, b) => a == b,
        }
    }

    /// Returns the text of a textual value.
    fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Char(c) => Some(Cow::Owned(c.to_string())),
            Value::String(s) | Value::FilePath(s) => Some(Cow::Borrowed(s)),
            _ => None,
        }
    }

    /// Consumes a textual value and returns its text.
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            Value::Char(c) => Some(c.to_string()),
            Value::String(s) | Value::FilePath(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => f.write_str(&format_real(*r)),
            Value::Char(c) => write!(f, "{}", c),
            Value::String(s) | Value::FilePath(s) => f.write_str(s),
            Value::IntegerInterval(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}

/// Exact comparison of an integer with a float, without rounding the integer.
fn integer_equals_real(i: i64, r: f64) -> bool {
    // 2^63 is the first float above i64::MAX
    r.fract() == 0.0 && r >= i64::MIN as f64 && r < 9_223_372_036_854_775_808.0 && r as i64 == i
}

/// Shortest round-trip text for a float, exponent written as `e+20`/`e-05`.
fn format_real(r: f64) -> String {
    if r.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{:?}", r);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<(i64, i64)> for Value {
    fn from((a, b): (i64, i64)) -> Self {
        Value::IntegerInterval(a, b)
    }
}
