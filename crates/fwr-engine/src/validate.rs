//! Field validators, one per supported data type.
//!
//! Validators are pure: raw substring in, validated value plus optional
//! failure reason out. A failure is data, never an error; the reason
//! string travels with the record into quarantine.

use chrono::NaiveDate;
use fwr_model::DataType;

/// Outcome of validating one extracted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// The value to emit; empty when validation failed.
    pub value: String,
    /// Human-readable failure reason, if any.
    pub reason: Option<String>,
}

impl Validated {
    fn ok(value: String) -> Self {
        Self {
            value,
            reason: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            value: String::new(),
            reason: Some(reason),
        }
    }
}

/// Validates a trimmed raw substring against the field's declared type.
pub fn validate_field(data_type: DataType, field_name: &str, raw: &str) -> Validated {
    match data_type {
        DataType::Text => validate_text(field_name, raw),
        DataType::Integer => validate_integer(field_name, raw),
        DataType::Date => validate_date(raw),
        DataType::Raw => Validated::ok(raw.to_string()),
    }
}

/// ASCII letters and spaces only; the empty string is valid.
fn validate_text(field_name: &str, raw: &str) -> Validated {
    if raw.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        Validated::ok(raw.to_string())
    } else {
        Validated::failed(format!("Invalid {field_name} (non-alpha or symbols)"))
    }
}

/// ASCII digits only; the empty string fails as non-digit.
fn validate_integer(field_name: &str, raw: &str) -> Validated {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        Validated::ok(raw.to_string())
    } else {
        Validated::failed(format!("Invalid {field_name} (non-digit)"))
    }
}

/// Two-digit years below this pivot map into the 2000s, the rest into the
/// 1900s: `10 → 2010`, `11 → 1911`.
const CENTURY_PIVOT: u32 = 11;

/// Six digits `YYMMDD`, reformatted to `YYYY-MM-DD`.
///
/// The month/day must form a calendar-valid date, leap years included.
/// The reason string is the fixed legacy `"Invalid DOB"` whatever the
/// field is called.
fn validate_date(raw: &str) -> Validated {
    match parse_yymmdd(raw) {
        Some(date) => Validated::ok(date.format("%Y-%m-%d").to_string()),
        None => Validated::failed("Invalid DOB".to_string()),
    }
}

fn parse_yymmdd(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy: u32 = raw[0..2].parse().ok()?;
    let month: u32 = raw[2..4].parse().ok()?;
    let day: u32 = raw[4..6].parse().ok()?;
    let year = if yy < CENTURY_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    };
    NaiveDate::from_ymd_opt(year as i32, month, day)
}
