use crate::domain::Birthday;
use crate::error::CoreError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const UPCOMING_WINDOW_DAYS: i64 = 7;
pub const MAX_UPCOMING_WINDOW_DAYS: i64 = 365;

/// Feb 29 birthdays are observed on Feb 28 in common years.
pub const LEAP_DAY_FALLBACK_DAY: u32 = 28;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_UPCOMING_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// The date a birthday falls on in `year`.
pub fn occurrence_in_year(birthday: Birthday, year: i32) -> NaiveDate {
    let month = birthday.month();
    let mut day = birthday.day();
    if month == 2 && day == 29 && !is_leap_year(year) {
        day = LEAP_DAY_FALLBACK_DAY;
    }
    // Every other month/day pair exists in every year.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// First occurrence on or after `today`.
pub fn next_occurrence(birthday: Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Weekend dates move to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        congratulation_date, is_leap_year, next_occurrence, occurrence_in_year,
        validate_window_days,
    };
    use crate::domain::Birthday;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn birthday(raw: &str) -> Birthday {
        Birthday::parse(raw).unwrap()
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn leap_day_falls_back_in_common_years() {
        let leap = birthday("29.02.2000");
        assert_eq!(occurrence_in_year(leap, 2025), date(2025, 2, 28));
        assert_eq!(occurrence_in_year(leap, 2028), date(2028, 2, 29));
        assert_eq!(occurrence_in_year(leap, 2100), date(2100, 2, 28));
    }

    #[test]
    fn next_occurrence_today_counts() {
        let b = birthday("10.03.1990");
        assert_eq!(next_occurrence(b, date(2025, 3, 10)), date(2025, 3, 10));
    }

    #[test]
    fn next_occurrence_rolls_into_next_year() {
        let b = birthday("02.01.1990");
        assert_eq!(next_occurrence(b, date(2025, 12, 29)), date(2026, 1, 2));
    }

    #[test]
    fn next_occurrence_applies_fallback_to_next_year() {
        let leap = birthday("29.02.2000");
        assert_eq!(next_occurrence(leap, date(2024, 3, 1)), date(2025, 2, 28));
        assert_eq!(next_occurrence(leap, date(2027, 3, 1)), date(2028, 2, 29));
    }

    #[test]
    fn congratulation_date_skips_weekends() {
        // 15.03.2025 is a Saturday.
        assert_eq!(congratulation_date(date(2025, 3, 15)), date(2025, 3, 17));
        assert_eq!(congratulation_date(date(2025, 3, 16)), date(2025, 3, 17));
        assert_eq!(congratulation_date(date(2025, 3, 14)), date(2025, 3, 14));
        assert_eq!(congratulation_date(date(2025, 3, 17)), date(2025, 3, 17));
    }

    #[test]
    fn window_days_bounds() {
        assert_eq!(validate_window_days(0).unwrap(), 0);
        assert_eq!(validate_window_days(365).unwrap(), 365);
        assert!(validate_window_days(-1).is_err());
        assert!(validate_window_days(366).is_err());
    }
}
