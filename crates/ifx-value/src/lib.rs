//! # ifx-value
//!
//! A loosely-typed value union and best-effort coercions to primitive Rust
//! types, oriented at code that assembles Informix SQL statements.
//!
//! A [`Value`] stands in for a dynamically-typed host value (a column read
//! from a driver, a form field, a cell from a report). Each coercion first
//! pattern-matches on the variant and only then falls back to parsing the
//! value's string form, failing with a [`ConvertError`] that carries the
//! offending value, the target kind, and the low-level parse error.
//!
//! ## Type Mappings
//!
//! | Informix Type | Rust Type |
//! |---------------|-----------|
//! | `BOOLEAN` | `bool` |
//! | `INT8` | `i64` |
//! | `SMALLFLOAT` | `f32` |
//! | `DECIMAL` | `rust_decimal::Decimal` |
//! | `LVARCHAR` | `String` |
//! | `DATE` | `chrono::NaiveDate` |
//! | `DATETIME YEAR TO SECOND` | `chrono::NaiveDateTime` |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod coerce;
pub mod error;
pub mod from_value;
pub mod value;

pub use coerce::is_in;
pub use error::{ConvertError, Target};
pub use from_value::FromValue;
pub use value::Value;
