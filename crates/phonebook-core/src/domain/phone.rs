use crate::error::CoreError;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

/// A phone number reduced to exactly ten ASCII digits.
///
/// Equality is on the normalized digits, so `(415) 555-1212` and
/// `415.555.1212` are the same phone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let digits = normalize_phone(raw);
        if digits.len() != PHONE_DIGITS {
            return Err(CoreError::InvalidPhone(raw.to_string()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, raw: &str) -> bool {
        self.0 == normalize_phone(raw)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
