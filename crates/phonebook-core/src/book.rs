use crate::domain::Record;
use crate::error::CoreError;
use crate::rules::{
    congratulation_date, next_occurrence, validate_window_days, UPCOMING_WINDOW_DAYS,
};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday_on: NaiveDate,
    pub days_until: i64,
    pub congratulation_date: NaiveDate,
}

/// Records keyed by name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Inserts `record`, or replaces the record with the same name in its
    /// existing position. The replaced record is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => Some(std::mem::replace(&mut self.records[index], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|index| &mut self.records[index])
    }

    /// Like [`AddressBook::find`], for callers that treat absence as an error.
    pub fn require(&self, name: &str) -> Result<&Record, CoreError> {
        self.find(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        self.find_mut(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    /// Removing an absent name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position(name).map(|index| self.records.remove(index))
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.collect_upcoming(today, UPCOMING_WINDOW_DAYS)
    }

    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<UpcomingBirthday>, CoreError> {
        let days = validate_window_days(days)?;
        Ok(self.collect_upcoming(today, days))
    }

    fn collect_upcoming(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let birthday_on = next_occurrence(birthday, today);
                let days_until = (birthday_on - today).num_days();
                if !(0..=window_days).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    birthday_on,
                    days_until,
                    congratulation_date: congratulation_date(birthday_on),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}
