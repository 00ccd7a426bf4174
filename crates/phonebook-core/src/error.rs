use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name is required")]
    EmptyName,
    #[error("Phone number must contain exactly 10 digits: {0}")]
    InvalidPhone(String),
    #[error("Invalid date format. Use DD.MM.YYYY: {input} ({reason})")]
    InvalidBirthday { input: String, reason: String },
    #[error("invalid upcoming window: {0} days")]
    InvalidWindowDays(i64),
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
    #[error("Contact {0} not found.")]
    ContactNotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday { .. }
            | CoreError::InvalidWindowDays(_) => CoreErrorKind::Validation,
            CoreError::PhoneNotFound(_) | CoreError::ContactNotFound(_) => CoreErrorKind::NotFound,
        }
    }
}
