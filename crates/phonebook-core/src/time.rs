use chrono::{Local, NaiveDate};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected DD.MM.YYYY")]
    Format,
    #[error("{0}")]
    Calendar(String),
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses `DD.MM.YYYY` with fixed-width fields only; surrounding
/// whitespace is a format error.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    if !has_date_shape(input) {
        return Err(DateParseError::Format);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|err| DateParseError::Calendar(err.to_string()))
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(index, byte)| match index {
        2 | 5 => *byte == b'.',
        _ => byte.is_ascii_digit(),
    })
}
