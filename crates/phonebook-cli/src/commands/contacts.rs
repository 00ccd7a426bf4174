use crate::commands::Context;
use crate::error::not_found;
use anyhow::{Context as _, Result};
use clap::Args;
use phonebook_core::domain::{Name, Phone, Record};
use phonebook_core::dto::RecordDto;

#[derive(Debug, Args)]
pub struct AddArgs {
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChangeArgs {
    pub name: String,
    pub old_phone: String,
    pub new_phone: String,
}

#[derive(Debug, Args)]
pub struct RemovePhoneArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub name: String,
}

/// Creates the contact, or appends the phone to an existing one.
pub fn add_contact(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    let phone = args.phone.as_deref().map(Phone::new).transpose()?;

    let message = match ctx.book.find_mut(name.as_str()) {
        Some(record) => {
            if let Some(phone) = phone {
                record.add_phone(phone.as_str())?;
            }
            "Contact updated."
        }
        None => {
            let mut record = Record::new(name.clone());
            if let Some(phone) = phone {
                record.add_phone(phone.as_str())?;
            }
            ctx.book.add_record(record);
            "Contact added."
        }
    };

    respond_with_record(ctx, name.as_str(), message)
}

pub fn change_phone(ctx: &mut Context<'_>, args: ChangeArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    ctx.book
        .require_mut(name.as_str())?
        .edit_phone(&args.old_phone, &args.new_phone)
        .with_context(|| format!("change phone for {}", name))?;
    respond_with_record(ctx, name.as_str(), "Contact updated.")
}

pub fn remove_phone(ctx: &mut Context<'_>, args: RemovePhoneArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    ctx.book
        .require_mut(name.as_str())?
        .remove_phone(&args.phone)
        .with_context(|| format!("remove phone for {}", name))?;
    respond_with_record(ctx, name.as_str(), "Phone removed.")
}

pub fn show_phones(ctx: &mut Context<'_>, args: PhoneArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    let record = ctx.book.require(name.as_str())?;
    let phones: Vec<String> = record
        .phones()
        .iter()
        .map(|phone| phone.as_str().to_string())
        .collect();

    if ctx.json {
        return ctx.print_json(&phones);
    }
    if phones.is_empty() {
        return ctx.say(format!("No phone numbers for {}.", name));
    }
    ctx.say(format!("{}: {}", name, phones.join(", ")))
}

pub fn show_all(ctx: &mut Context<'_>) -> Result<()> {
    if ctx.json {
        let dtos: Vec<RecordDto> = ctx.book.records().iter().map(RecordDto::from).collect();
        return ctx.print_json(&dtos);
    }
    if ctx.book.is_empty() {
        return ctx.say("No contacts in address book.");
    }
    let lines: Vec<String> = ctx.book.records().iter().map(Record::to_string).collect();
    ctx.say(lines.join("\n"))
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    if ctx.book.delete(name.as_str()).is_none() {
        return Err(not_found(format!("Contact {} not found.", name)));
    }
    if ctx.json {
        return ctx.print_json(&serde_json::json!({ "name": name.as_str() }));
    }
    ctx.say("Contact deleted.")
}

pub(crate) fn respond_with_record(ctx: &mut Context<'_>, name: &str, message: &str) -> Result<()> {
    if ctx.json {
        let dto = RecordDto::from(ctx.book.require(name)?);
        return ctx.print_json(&dto);
    }
    ctx.say(message)
}
