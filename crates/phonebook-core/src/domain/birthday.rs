use crate::error::CoreError;
use crate::time::{format_date, parse_date};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        parse_date(raw)
            .map(Self)
            .map_err(|err| CoreError::InvalidBirthday {
                input: raw.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl FromStr for Birthday {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Birthday::parse(raw)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::{CoreError, CoreErrorKind};

    #[test]
    fn birthday_renders_what_it_parsed() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "09.11.1989"] {
            assert_eq!(Birthday::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn birthday_rejects_invalid_calendar_date() {
        let err = Birthday::parse("31.06.2020").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        match err {
            CoreError::InvalidBirthday { input, .. } => assert_eq!(input, "31.06.2020"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn birthday_rejects_padded_input() {
        assert!(Birthday::parse(" 12.03.2025\t").is_err());
        assert!(Birthday::parse("12.03.2025 ").is_err());
        assert!(Birthday::parse("\n12.03.2025").is_err());
    }

    #[test]
    fn birthday_rejects_other_formats() {
        assert!("2020-06-01".parse::<Birthday>().is_err());
        assert!("1.6.2020".parse::<Birthday>().is_err());
    }
}
