//! SQL literal rendering for each supported target type.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use ifx_value::{ConvertError, Value};

/// The null token emitted for absent values.
pub const NULL: &str = "null";

/// The Informix `CURRENT` datetime token (lowercase, unquoted).
pub const CURRENT: &str = "current";

/// Render a string literal: `'<string form>'`, or `null_literal` for NULL.
///
/// Single quotes inside the value are not escaped; sanitizing the input
/// is the caller's responsibility.
#[must_use]
pub fn as_sql_string(value: &Value, null_literal: &str) -> String {
    if value.is_null() {
        return null_literal.to_string();
    }
    format!("'{value}'")
}

/// Render an integer literal: decimal digits, or `null_literal` for a
/// NULL or empty value.
pub fn as_sql_integer(value: &Value, null_literal: &str) -> Result<String, ConvertError> {
    if value.is_null_or_empty() {
        return Ok(null_literal.to_string());
    }
    Ok(value.to_integer()?.to_string())
}

/// Render an integer known at the call site. No null handling.
#[must_use]
pub fn as_sql_integer_from_int(n: i64) -> String {
    n.to_string()
}

/// Render a DBDATE literal: `'dd.mm.yyyy'`, or `null_literal` for a NULL
/// or empty value.
pub fn as_sql_date(value: &Value, null_literal: &str) -> Result<String, ConvertError> {
    if value.is_null_or_empty() {
        return Ok(null_literal.to_string());
    }
    Ok(format!("'{}'", value.to_datetime()?.format("%d.%m.%Y")))
}

/// Render a `DATETIME YEAR TO SECOND` literal: `'yyyy-mm-dd hh:mm:ss'`,
/// or the time zeroed out when `include_time` is false.
///
/// A NULL value, or one equal to [`NaiveDateTime::MIN`] (the sentinel
/// legacy callers use for "no date"), renders as the bare null token.
pub fn as_sql_datetime_full(value: &Value, include_time: bool) -> Result<String, ConvertError> {
    if value.is_null() {
        return Ok(NULL.to_string());
    }
    let dt = value.to_datetime()?;
    if dt == NaiveDateTime::MIN {
        tracing::trace!("minimum datetime rendered as null literal");
        return Ok(NULL.to_string());
    }
    if include_time {
        Ok(format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")))
    } else {
        Ok(format!("'{} 00:00:00'", dt.format("%Y-%m-%d")))
    }
}

/// Render an `mdy(m,d,yyyy)` construct (unquoted, no zero padding), or
/// the null token for a NULL value.
pub fn as_sql_mdy(value: &Value) -> Result<String, ConvertError> {
    if value.is_null() {
        return Ok(NULL.to_string());
    }
    Ok(mdy(value.to_datetime()?.date()))
}

/// Render `mdy(m,d,yyyy)` from a date-time known at the call site.
///
/// [`NaiveDateTime::MIN`] renders as the null token.
#[must_use]
pub fn as_sql_mdy_from_datetime(dt: NaiveDateTime) -> String {
    if dt == NaiveDateTime::MIN {
        tracing::trace!("minimum datetime rendered as null literal");
        return NULL.to_string();
    }
    mdy(dt.date())
}

fn mdy(date: NaiveDate) -> String {
    format!("mdy({},{},{})", date.month(), date.day(), date.year())
}

/// Render a float literal in its default string form, or the null token
/// for a NULL or empty value.
pub fn as_sql_float(value: &Value) -> Result<String, ConvertError> {
    if value.is_null_or_empty() {
        return Ok(NULL.to_string());
    }
    Ok(value.to_float()?.to_string())
}

/// Render a float known at the call site. No null handling.
#[must_use]
pub fn as_sql_float_from_float(f: f32) -> String {
    f.to_string()
}

/// Render a decimal literal in its default string form, or
/// `null_literal` for a NULL or empty value.
pub fn as_sql_decimal(value: &Value, null_literal: &str) -> Result<String, ConvertError> {
    if value.is_null_or_empty() {
        return Ok(null_literal.to_string());
    }
    Ok(value.to_decimal()?.to_string())
}

/// Render a decimal known at the call site. No null handling.
#[must_use]
pub fn as_sql_decimal_from_decimal(d: Decimal) -> String {
    d.to_string()
}

/// Render a null-safe cast of the value's string form to `text`:
/// `CAST('<string form>' AS text)`, or the null token for NULL.
#[must_use]
pub fn as_sql_text(value: &Value) -> String {
    if value.is_null() {
        return NULL.to_string();
    }
    format!("CAST({} AS text)", as_sql_string(value, NULL))
}
