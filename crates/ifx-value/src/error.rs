//! Type conversion error types.

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// The type a failed conversion was aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 64-bit integer.
    Integer,
    /// `chrono::NaiveDateTime`.
    DateTime,
    /// Boolean.
    Boolean,
    /// `rust_decimal::Decimal`.
    Decimal,
    /// 32-bit float.
    Float,
    /// A direct cast to the named Rust type.
    Cast(&'static str),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("Integer"),
            Self::DateTime => f.write_str("DateTime"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Decimal => f.write_str("Decimal"),
            Self::Float => f.write_str("Float"),
            Self::Cast(name) => f.write_str(name),
        }
    }
}

/// Error raised when a value cannot be converted to the requested type.
///
/// Carries a human-readable rendering of the offending value (`<null>` for
/// NULL, `<empty>` for a blank string, the default string form otherwise),
/// the target kind, and the low-level parse error as the source.
#[derive(Debug, Error)]
#[error("failed to convert value ({value}) to {target}")]
pub struct ConvertError {
    value: String,
    target: Target,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConvertError {
    /// Build an error for `value` failing to convert to `target`, with the
    /// underlying parse error as the cause.
    pub(crate) fn new<E>(value: &Value, target: Target, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            value: rendered(value),
            target,
            source: Some(Box::new(source)),
        }
    }

    /// Build an error with no underlying cause (e.g. a NULL reaching a
    /// non-nullable conversion).
    pub(crate) fn bare(value: &Value, target: Target) -> Self {
        Self {
            value: rendered(value),
            target,
            source: None,
        }
    }

    /// The rendering of the offending value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The type the conversion was aiming for.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }
}

/// Type-mismatch cause attached to failed direct casts.
#[derive(Debug, Error)]
#[error("value of type {from} is not {to}")]
pub(crate) struct Mismatch {
    pub(crate) from: &'static str,
    pub(crate) to: &'static str,
}

fn rendered(value: &Value) -> String {
    if value.is_null() {
        return "<null>".to_string();
    }
    let s = value.to_string();
    if s.trim().is_empty() {
        return "<empty>".to_string();
    }
    s
}
