use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use phonebook_core::domain::{Birthday, Name, Phone, Record};
use phonebook_core::AddressBook;
use rusqlite::{params, Connection};

const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct RecordsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> RecordsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads the whole book. Stored values go back through the validating
    /// constructors, so a tampered database surfaces as an error.
    pub fn load_all(&self) -> Result<AddressBook> {
        let mut contacts = self.conn.prepare(
            "SELECT position, name, birthday FROM contacts ORDER BY position;",
        )?;
        let mut phone_rows = self.conn.prepare(
            "SELECT phone FROM contact_phones WHERE contact_position = ?1 ORDER BY position;",
        )?;

        let rows = contacts
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut book = AddressBook::new();
        for (position, name, birthday) in rows {
            let stored_phones = phone_rows
                .query_map([position], |row| row.get::<_, String>(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let phones = stored_phones
                .iter()
                .map(|raw| Phone::new(raw))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let birthday = birthday.as_deref().map(parse_stored_date).transpose()?;
            book.add_record(Record::with_parts(Name::new(&name)?, phones, birthday));
        }
        Ok(book)
    }

    /// Replaces the stored snapshot with `book` in one transaction.
    pub fn replace_all(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM contact_phones;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;
        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO contact_phones (contact_position, position, phone) VALUES (?1, ?2, ?3);",
            )?;
            for (position, record) in (0_i64..).zip(book.records()) {
                let birthday = record
                    .birthday()
                    .map(|birthday| birthday.date().format(STORED_DATE_FORMAT).to_string());
                insert_contact.execute(params![position, record.name().as_str(), birthday])?;
                for (phone_position, phone) in (0_i64..).zip(record.phones()) {
                    insert_phone.execute(params![position, phone_position, phone.as_str()])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_stored_date(raw: &str) -> Result<Birthday> {
    NaiveDate::parse_from_str(raw, STORED_DATE_FORMAT)
        .map(Birthday::from_date)
        .map_err(|_| StoreError::InvalidStoredDate(raw.to_string()))
}
