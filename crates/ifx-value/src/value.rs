//! Loosely-typed value representation.

use std::fmt;

/// A loosely-typed value as seen at a dynamic language boundary.
///
/// This enum provides a type-safe way to handle values that may be of
/// various primitive types, including NULL. It is a closed union: every
/// host value enters through a `From` impl, so there is no "unknown"
/// escape hatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL / absent value.
    Null,
    /// Boolean value (BOOLEAN).
    Bool(bool),
    /// 64-bit signed integer (INT8).
    Int(i64),
    /// 32-bit floating point (SMALLFLOAT).
    Float(f32),
    /// Decimal value (DECIMAL, MONEY).
    Decimal(rust_decimal::Decimal),
    /// String value (CHAR, VARCHAR, LVARCHAR).
    String(String),
    /// Date value (DATE).
    Date(chrono::NaiveDate),
    /// DateTime value (DATETIME YEAR TO SECOND).
    DateTime(chrono::NaiveDateTime),
}

impl Value {
    /// Check if the value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value is NULL or its string form is empty.
    #[must_use]
    pub fn is_null_or_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Get the Informix type name as a string.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "BOOLEAN",
            Self::Int(_) => "INT8",
            Self::Float(_) => "SMALLFLOAT",
            Self::Decimal(_) => "DECIMAL",
            Self::String(_) => "LVARCHAR",
            Self::Date(_) => "DATE",
            Self::DateTime(_) => "DATETIME YEAR TO SECOND",
        }
    }
}

/// Renders the value's default string form, the one every fallback
/// string-parse operates on. `Null` renders as the empty string; callers
/// are expected to have checked [`Value::is_null`] first.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{}", v.format("%Y-%m-%d")),
            Self::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<rust_decimal::Decimal> for Value {
    fn from(v: rust_decimal::Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(0).is_null());
        assert!(!Value::String(String::new()).is_null());
    }

    #[test]
    fn test_is_null_or_empty() {
        assert!(Value::Null.is_null_or_empty());
        assert!(Value::String(String::new()).is_null_or_empty());
        assert!(!Value::String(" ".to_string()).is_null_or_empty());
        assert!(!Value::Int(0).is_null_or_empty());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    }

    #[test]
    fn test_display_datetime() {
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(13, 0, 0))
            .unwrap();
        assert_eq!(Value::DateTime(dt).to_string(), "2024-03-05 13:00:00");
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(Value::Null.to_string(), "");
    }
}
