use anyhow::Result;
use phonebook_config::AppConfig;
use phonebook_core::AddressBook;
use serde::Serialize;
use std::io::Write;

pub mod birthdays;
pub mod contacts;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub out: &'a mut dyn Write,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", message.as_ref())?;
        Ok(())
    }

    pub fn print_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut *self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}
