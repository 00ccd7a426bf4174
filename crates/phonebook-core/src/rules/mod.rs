pub mod birthdays;

pub use birthdays::{
    congratulation_date, is_leap_year, next_occurrence, occurrence_in_year, validate_window_days,
    LEAP_DAY_FALLBACK_DAY, MAX_UPCOMING_WINDOW_DAYS, UPCOMING_WINDOW_DAYS,
};
