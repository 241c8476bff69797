//! Narrow, variant-exact casts out of a [`Value`].

use crate::error::{ConvertError, Mismatch, Target};
use crate::value::Value;

/// Trait for types a [`Value`] can be cast to directly.
///
/// Unlike the coercions in [`crate::coerce`], a cast never parses: the
/// value must already hold the requested representation. This is the
/// narrow escape hatch for callers that know the variant.
pub trait FromValue: Sized {
    /// Extract this type from a value, failing on any other variant.
    fn from_value(value: &Value) -> Result<Self, ConvertError>;
}

impl Value {
    /// Cast to `T` without conversion.
    ///
    /// Fails with a `Cast` target kind (and a type-mismatch cause naming
    /// the source type) unless the value already holds a `T`.
    pub fn cast_to<T: FromValue>(&self) -> Result<T, ConvertError> {
        T::from_value(self)
    }
}

fn mismatch(value: &Value, to: &'static str) -> ConvertError {
    ConvertError::new(
        value,
        Target::Cast(to),
        Mismatch {
            from: value.type_name(),
            to,
        },
    )
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Bool(v) => Ok(*v),
            _ => Err(mismatch(value, "bool")),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Int(v) => Ok(*v),
            _ => Err(mismatch(value, "i64")),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Float(v) => Ok(*v),
            _ => Err(mismatch(value, "f32")),
        }
    }
}

impl FromValue for rust_decimal::Decimal {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Decimal(v) => Ok(*v),
            _ => Err(mismatch(value, "Decimal")),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::String(v) => Ok(v.clone()),
            _ => Err(mismatch(value, "String")),
        }
    }
}

impl FromValue for chrono::NaiveDate {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::Date(v) => Ok(*v),
            _ => Err(mismatch(value, "NaiveDate")),
        }
    }
}

impl FromValue for chrono::NaiveDateTime {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        match value {
            Value::DateTime(v) => Ok(*v),
            _ => Err(mismatch(value, "NaiveDateTime")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_exact_variant() {
        assert_eq!(Value::Int(42).cast_to::<i64>().unwrap(), 42);
        assert_eq!(
            Value::from("hello").cast_to::<String>().unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_cast_never_parses() {
        // "42" is coercible to an integer but not castable to one
        let err = Value::from("42").cast_to::<i64>().unwrap_err();
        assert_eq!(err.target(), Target::Cast("i64"));
        assert_eq!(err.value(), "42");
    }

    #[test]
    fn test_cast_null_fails() {
        let err = Value::Null.cast_to::<bool>().unwrap_err();
        assert_eq!(err.value(), "<null>");
        assert_eq!(err.target(), Target::Cast("bool"));
    }

    #[test]
    fn test_cast_mismatch_cause_names_source_type() {
        let err = Value::Bool(true).cast_to::<i64>().unwrap_err();
        let cause = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("value of type BOOLEAN is not i64"));
    }
}
