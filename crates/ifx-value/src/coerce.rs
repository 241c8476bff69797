//! Best-effort coercions from a [`Value`] to primitive Rust types.
//!
//! Each conversion first pattern-matches on the variant and only then falls
//! back to parsing the value's string form. A NULL value never reaches a
//! parser: the non-nullable conversions fail on it immediately and the
//! `*_nullable` variants substitute the caller-supplied default.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{ConvertError, Target};
use crate::value::Value;

/// Date/time layouts tried, in order, by the string-parse fallback.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

impl Value {
    /// Coerce to a 64-bit integer.
    ///
    /// `Int` passes through; anything else must have a base-10 integer
    /// string form.
    pub fn to_integer(&self) -> Result<i64, ConvertError> {
        match self {
            Self::Null => Err(ConvertError::bare(self, Target::Integer)),
            Self::Int(v) => Ok(*v),
            other => other
                .to_string()
                .parse::<i64>()
                .map_err(|e| ConvertError::new(self, Target::Integer, e)),
        }
    }

    /// Coerce to a 64-bit integer, substituting `default` when NULL.
    pub fn to_integer_nullable(&self, default: Option<i64>) -> Result<Option<i64>, ConvertError> {
        if self.is_null() {
            return Ok(default);
        }
        self.to_integer().map(Some)
    }

    /// Coerce to a date-time.
    ///
    /// `DateTime` passes through and `Date` becomes midnight; anything else
    /// has its string form tried against a fixed set of layouts.
    pub fn to_datetime(&self) -> Result<NaiveDateTime, ConvertError> {
        match self {
            Self::Null => Err(ConvertError::bare(self, Target::DateTime)),
            Self::DateTime(v) => Ok(*v),
            Self::Date(v) => Ok(v.and_time(NaiveTime::MIN)),
            other => {
                let s = other.to_string();
                let mut last_err = None;
                for layout in DATETIME_FORMATS {
                    match NaiveDateTime::parse_from_str(&s, layout) {
                        Ok(dt) => return Ok(dt),
                        Err(e) => last_err = Some(e),
                    }
                }
                for layout in DATE_FORMATS {
                    match NaiveDate::parse_from_str(&s, layout) {
                        Ok(d) => return Ok(d.and_time(NaiveTime::MIN)),
                        Err(e) => last_err = Some(e),
                    }
                }
                Err(match last_err {
                    Some(e) => ConvertError::new(self, Target::DateTime, e),
                    None => ConvertError::bare(self, Target::DateTime),
                })
            }
        }
    }

    /// Coerce to a date-time, substituting `default` when NULL or when the
    /// value is the empty string.
    pub fn to_datetime_nullable(
        &self,
        default: Option<NaiveDateTime>,
    ) -> Result<Option<NaiveDateTime>, ConvertError> {
        if self.is_null_or_empty() {
            return Ok(default);
        }
        self.to_datetime().map(Some)
    }

    /// Coerce to a boolean.
    ///
    /// `Bool` passes through; anything else must render exactly `true` or
    /// `false` (case-sensitive, Rust's boolean literal grammar).
    pub fn to_boolean(&self) -> Result<bool, ConvertError> {
        match self {
            Self::Null => Err(ConvertError::bare(self, Target::Boolean)),
            Self::Bool(v) => Ok(*v),
            other => other
                .to_string()
                .parse::<bool>()
                .map_err(|e| ConvertError::new(self, Target::Boolean, e)),
        }
    }

    /// Coerce to a decimal.
    ///
    /// `Decimal` passes through and `Int` widens losslessly; anything else
    /// has its string form parsed.
    pub fn to_decimal(&self) -> Result<Decimal, ConvertError> {
        match self {
            Self::Null => Err(ConvertError::bare(self, Target::Decimal)),
            Self::Decimal(v) => Ok(*v),
            Self::Int(v) => Ok(Decimal::from(*v)),
            other => other
                .to_string()
                .parse::<Decimal>()
                .map_err(|e| ConvertError::new(self, Target::Decimal, e)),
        }
    }

    /// Coerce to a decimal, substituting `default` when NULL.
    pub fn to_decimal_nullable(
        &self,
        default: Option<Decimal>,
    ) -> Result<Option<Decimal>, ConvertError> {
        if self.is_null() {
            return Ok(default);
        }
        self.to_decimal().map(Some)
    }

    /// Coerce to a 32-bit float.
    pub fn to_float(&self) -> Result<f32, ConvertError> {
        match self {
            Self::Null => Err(ConvertError::bare(self, Target::Float)),
            Self::Float(v) => Ok(*v),
            other => other
                .to_string()
                .parse::<f32>()
                .map_err(|e| ConvertError::new(self, Target::Float, e)),
        }
    }
}

/// Check whether `value` equals any element of `candidates`.
#[must_use]
pub fn is_in<T: PartialEq>(value: &T, candidates: &[T]) -> bool {
    candidates.iter().any(|c| c == value)
}
