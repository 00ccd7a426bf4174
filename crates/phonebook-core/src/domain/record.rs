use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use std::fmt;

/// One contact: a fixed name, phones in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends without deduplicating.
    pub fn add_phone(&mut self, raw: &str) -> Result<&Phone, CoreError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<Phone, CoreError> {
        let index = self.phone_index(raw)?;
        Ok(self.phones.remove(index))
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let index = self.phone_index(old)?;
        let replacement = Phone::new(new)?;
        self.phones[index] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.matches(raw))
    }

    /// Sets or replaces the birthday.
    pub fn add_birthday(&mut self, raw: &str) -> Result<Birthday, CoreError> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    fn phone_index(&self, raw: &str) -> Result<usize, CoreError> {
        self.phones
            .iter()
            .position(|phone| phone.matches(raw))
            .ok_or_else(|| CoreError::PhoneNotFound(raw.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::domain::Name;
    use crate::error::{CoreError, CoreErrorKind};

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|phone| phone.as_str()).collect()
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let mut ada = record("Ada");
        ada.add_phone("4155551212").unwrap();
        ada.add_phone("(212) 555-0000").unwrap();
        ada.add_phone("415-555-1212").unwrap();
        assert_eq!(phones(&ada), ["4155551212", "2125550000", "4155551212"]);
    }

    #[test]
    fn add_phone_rejects_invalid_without_mutation() {
        let mut ada = record("Ada");
        let err = ada.add_phone("12345").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert!(ada.phones().is_empty());
    }

    #[test]
    fn remove_phone_matches_normalized_value() {
        let mut ada = record("Ada");
        ada.add_phone("4155551212").unwrap();
        ada.add_phone("2125550000").unwrap();
        let removed = ada.remove_phone("(415) 555-1212").unwrap();
        assert_eq!(removed.as_str(), "4155551212");
        assert_eq!(phones(&ada), ["2125550000"]);
    }

    #[test]
    fn remove_phone_reports_missing() {
        let mut ada = record("Ada");
        let err = ada.remove_phone("4155551212").unwrap_err();
        assert_eq!(err, CoreError::PhoneNotFound("4155551212".to_string()));
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut ada = record("Ada");
        ada.add_phone("1111111111").unwrap();
        ada.add_phone("2222222222").unwrap();
        ada.add_phone("3333333333").unwrap();
        ada.edit_phone("222-222-2222", "4444444444").unwrap();
        assert_eq!(phones(&ada), ["1111111111", "4444444444", "3333333333"]);
    }

    #[test]
    fn edit_phone_with_invalid_new_value_leaves_list_unchanged() {
        let mut ada = record("Ada");
        ada.add_phone("1111111111").unwrap();
        let before = ada.clone();
        let err = ada.edit_phone("1111111111", "12").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert_eq!(ada, before);
    }

    #[test]
    fn edit_phone_reports_missing_old_value() {
        let mut ada = record("Ada");
        ada.add_phone("1111111111").unwrap();
        let err = ada.edit_phone("9999999999", "2222222222").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        assert_eq!(phones(&ada), ["1111111111"]);
    }

    #[test]
    fn find_phone_returns_match_or_none() {
        let mut ada = record("Ada");
        ada.add_phone("1111111111").unwrap();
        assert_eq!(ada.find_phone("111.111.1111").unwrap().as_str(), "1111111111");
        assert!(ada.find_phone("2222222222").is_none());
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut ada = record("Ada");
        ada.add_birthday("10.12.1815").unwrap();
        ada.add_birthday("11.12.1815").unwrap();
        assert_eq!(ada.birthday().unwrap().to_string(), "11.12.1815");
        assert!(ada.add_birthday("1815-12-10").is_err());
        assert_eq!(ada.birthday().unwrap().to_string(), "11.12.1815");
    }

    #[test]
    fn display_with_phones_and_birthday() {
        let mut ada = record("Ada");
        ada.add_phone("1111111111").unwrap();
        ada.add_phone("2222222222").unwrap();
        ada.add_birthday("10.12.1815").unwrap();
        assert_eq!(
            ada.to_string(),
            "Contact name: Ada, phones: 1111111111; 2222222222, birthday: 10.12.1815"
        );
    }

    #[test]
    fn display_without_phones_or_birthday() {
        assert_eq!(record("Ada").to_string(), "Contact name: Ada, phones: ");
    }
}
