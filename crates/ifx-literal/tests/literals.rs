//! End-to-end checks of the emitted Informix literal grammar.

use chrono::{NaiveDate, NaiveDateTime};
use ifx_literal::{
    as_sql_date, as_sql_datetime_full, as_sql_decimal, as_sql_float, as_sql_integer,
    as_sql_mdy, as_sql_string, as_sql_text, CURRENT, NULL,
};
use ifx_value::{Target, Value};

fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, mi, s))
        .unwrap()
}

#[test]
fn string_literal_is_quoted_without_escaping() {
    assert_eq!(as_sql_string(&Value::Null, NULL), "null");
    // inner quotes pass through unescaped -- documented limitation
    assert_eq!(as_sql_string(&Value::from("it's"), NULL), "'it's'");
}

#[test]
fn integer_literal_has_no_quotes() {
    assert_eq!(as_sql_integer(&Value::from("42"), NULL).unwrap(), "42");
    assert_eq!(as_sql_integer(&Value::Int(42), NULL).unwrap(), "42");
}

#[test]
fn date_literal_uses_dbdate_rendering() {
    assert_eq!(
        as_sql_date(&Value::from("2024-03-05"), NULL).unwrap(),
        "'05.03.2024'"
    );
    assert_eq!(as_sql_date(&Value::from(""), NULL).unwrap(), "null");
}

#[test]
fn datetime_full_renders_year_to_second() {
    assert_eq!(
        as_sql_datetime_full(&Value::DateTime(dt(2024, 3, 5, 13, 0, 0)), true).unwrap(),
        "'2024-03-05 13:00:00'"
    );
    assert_eq!(
        as_sql_datetime_full(&Value::DateTime(dt(2024, 3, 5, 13, 0, 0)), false).unwrap(),
        "'2024-03-05 00:00:00'"
    );
}

#[test]
fn datetime_full_min_sentinel_is_null() {
    assert_eq!(
        as_sql_datetime_full(&Value::DateTime(NaiveDateTime::MIN), true).unwrap(),
        "null"
    );
    assert_eq!(as_sql_datetime_full(&Value::Null, true).unwrap(), "null");
}

#[test]
fn mdy_construct_is_unpadded() {
    assert_eq!(
        as_sql_mdy(&Value::DateTime(dt(2024, 3, 5, 0, 0, 0))).unwrap(),
        "mdy(3,5,2024)"
    );
}

#[test]
fn decimal_failure_carries_value_and_target() {
    let err = as_sql_decimal(&Value::from("abc"), NULL).unwrap_err();
    assert_eq!(err.target(), Target::Decimal);
    assert_eq!(err.value(), "abc");
}

#[test]
fn float_null_or_empty_collapses_to_null() {
    assert_eq!(as_sql_float(&Value::Null).unwrap(), "null");
    assert_eq!(as_sql_float(&Value::from("")).unwrap(), "null");
    assert_eq!(as_sql_float(&Value::from("1.5")).unwrap(), "1.5");
}

#[test]
fn text_cast_wraps_the_quoted_form() {
    assert_eq!(as_sql_text(&Value::Null), "null");
    assert_eq!(as_sql_text(&Value::Int(42)), "CAST('42' AS text)");
}

#[test]
fn current_token() {
    assert_eq!(CURRENT, "current");
}

#[test]
fn formatting_is_not_idempotent() {
    // feeding a formatted literal back in quotes the quotes; re-application
    // is out of scope by design
    let once = as_sql_string(&Value::from("abc"), NULL);
    let twice = as_sql_string(&Value::from(once.as_str()), NULL);
    assert_eq!(once, "'abc'");
    assert_eq!(twice, "''abc''");
    assert_ne!(once, twice);
}
