pub mod db;
pub mod error;
pub mod migrate;
pub mod paths;
pub mod repo;

use crate::error::Result;
use phonebook_core::AddressBook;
use rusqlite::Connection;
use std::path::Path;

/// SQLite-backed snapshot of an [`AddressBook`].
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens or creates the database at `path`. A file that does not exist
    /// yet behaves like an empty book once migrated.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn records(&self) -> repo::RecordsRepo<'_> {
        repo::RecordsRepo::new(&self.conn)
    }

    pub fn load_book(&self) -> Result<AddressBook> {
        self.records().load_all()
    }

    pub fn save_book(&self, book: &AddressBook) -> Result<()> {
        self.records().replace_all(book)
    }
}

/// Opens `path`, migrates it, and returns the store with its book.
pub fn load(path: &Path) -> Result<(Store, AddressBook)> {
    let store = Store::open(path)?;
    store.migrate()?;
    let book = store.load_book()?;
    Ok((store, book))
}
