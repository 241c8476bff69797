//! # ifx-literal
//!
//! Renders loosely-typed [`ifx_value::Value`]s as literals embeddable
//! directly in Informix SQL statement text: quoted strings, integers,
//! the `'dd.mm.yyyy'` DBDATE rendering, `DATETIME YEAR TO SECOND`
//! literals, `mdy(...)` constructs, floats, decimals, the `current`
//! token, and a null-safe `CAST(... AS text)` wrapper.
//!
//! Every function returns either a complete, syntactically valid literal
//! for its target type or the null token; never a partially-formed
//! literal. Conversion failures from the coercion layer propagate
//! unchanged as [`ifx_value::ConvertError`].
//!
//! ## Example
//!
//! ```
//! use ifx_literal::{as_sql_date, as_sql_string, NULL};
//! use ifx_value::Value;
//!
//! let sql = format!(
//!     "UPDATE orders SET note = {}, shipped = {}",
//!     as_sql_string(&Value::from("expedited"), NULL),
//!     as_sql_date(&Value::from("2024-03-05"), NULL)?,
//! );
//! assert_eq!(
//!     sql,
//!     "UPDATE orders SET note = 'expedited', shipped = '05.03.2024'"
//! );
//! # Ok::<(), ifx_value::ConvertError>(())
//! ```
//!
//! ## Known limitation
//!
//! [`as_sql_string`] performs no escaping of single quotes inside the
//! value; sanitizing the input is the caller's responsibility.

mod literal;

pub use literal::{
    as_sql_date, as_sql_datetime_full, as_sql_decimal, as_sql_decimal_from_decimal, as_sql_float,
    as_sql_float_from_float, as_sql_integer, as_sql_integer_from_int, as_sql_mdy,
    as_sql_mdy_from_datetime, as_sql_string, as_sql_text, CURRENT, NULL,
};
