use crate::commands::birthdays::{self, AddBirthdayArgs, BirthdaysArgs, ShowBirthdayArgs};
use crate::commands::contacts::{
    self, AddArgs, ChangeArgs, DeleteArgs, PhoneArgs, RemovePhoneArgs,
};
use crate::commands::Context;
use crate::error::{insufficient_arguments, invalid_input, user_message};
use anyhow::{Context as _, Result};
use phonebook_config::AppConfig;
use phonebook_core::AddressBook;
use phonebook_store::Store;
use std::io::{BufRead, Write};
use tracing::debug;

const ADD_USAGE: &str = "add <name> [phone]";
const CHANGE_USAGE: &str = "change <name> <old_phone> <new_phone>";
const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
const PHONE_USAGE: &str = "phone <name>";
const DELETE_USAGE: &str = "delete <name>";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

const HELP: &[(&str, &str)] = &[
    ("hello", "Greet the bot."),
    (ADD_USAGE, "Add a contact, or a 10-digit phone to an existing one."),
    (CHANGE_USAGE, "Replace one of a contact's phones."),
    (REMOVE_PHONE_USAGE, "Remove one of a contact's phones."),
    (PHONE_USAGE, "Show a contact's phones."),
    ("all", "Show every contact."),
    (DELETE_USAGE, "Delete a contact."),
    (ADD_BIRTHDAY_USAGE, "Set a contact's birthday."),
    (SHOW_BIRTHDAY_USAGE, "Show a contact's birthday."),
    ("birthdays [days]", "Show whom to congratulate in the coming days."),
    ("help", "Show this list."),
    ("close / exit", "Save and quit."),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Splits a line on whitespace; the command word is lowercased.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let args = parts.map(str::to_string).collect();
    (command, args)
}

/// Reads commands until `close`/`exit` or end of input, then saves the book.
/// A failing command prints its message and the session goes on.
pub fn run_session<R: BufRead, W: Write>(
    store: &Store,
    book: &mut AddressBook,
    config: &AppConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Welcome to the assistant bot!")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", config.session.prompt)?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let (command, args) = parse_input(&line.context("read command")?);
        if command.is_empty() {
            continue;
        }

        let mut ctx = Context {
            book: &mut *book,
            out: &mut *out,
            json: false,
            config,
        };
        match dispatch(&mut ctx, &command, &args) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                let detail = format!("{:#}", err);
                debug!(command = %command, error = %detail, "command failed");
                writeln!(out, "{}", user_message(&err))?;
            }
        }
    }

    store.save_book(book).context("save address book")?;
    debug!(contacts = book.len(), "address book saved");
    writeln!(out, "Good bye!")?;
    Ok(())
}

fn dispatch(ctx: &mut Context<'_>, command: &str, args: &[String]) -> Result<Flow> {
    match command {
        "close" | "exit" => return Ok(Flow::Exit),
        "hello" => ctx.say("How can I help you?")?,
        "help" => ctx.say(help_text())?,
        "add" => contacts::add_contact(
            ctx,
            AddArgs {
                name: arg(args, 0, ADD_USAGE)?,
                phone: args.get(1).cloned(),
            },
        )?,
        "change" => contacts::change_phone(
            ctx,
            ChangeArgs {
                name: arg(args, 0, CHANGE_USAGE)?,
                old_phone: arg(args, 1, CHANGE_USAGE)?,
                new_phone: arg(args, 2, CHANGE_USAGE)?,
            },
        )?,
        "remove-phone" => contacts::remove_phone(
            ctx,
            RemovePhoneArgs {
                name: arg(args, 0, REMOVE_PHONE_USAGE)?,
                phone: arg(args, 1, REMOVE_PHONE_USAGE)?,
            },
        )?,
        "phone" => contacts::show_phones(
            ctx,
            PhoneArgs {
                name: arg(args, 0, PHONE_USAGE)?,
            },
        )?,
        "all" => contacts::show_all(ctx)?,
        "delete" => contacts::delete_contact(
            ctx,
            DeleteArgs {
                name: arg(args, 0, DELETE_USAGE)?,
            },
        )?,
        "add-birthday" => birthdays::add_birthday(
            ctx,
            AddBirthdayArgs {
                name: arg(args, 0, ADD_BIRTHDAY_USAGE)?,
                birthday: arg(args, 1, ADD_BIRTHDAY_USAGE)?,
            },
        )?,
        "show-birthday" => birthdays::show_birthday(
            ctx,
            ShowBirthdayArgs {
                name: arg(args, 0, SHOW_BIRTHDAY_USAGE)?,
            },
        )?,
        "birthdays" => {
            let days = args
                .first()
                .map(|raw| {
                    raw.parse::<i64>()
                        .map_err(|_| invalid_input(format!("Invalid number of days: {}", raw)))
                })
                .transpose()?;
            birthdays::upcoming_birthdays(ctx, BirthdaysArgs { today: None, days })?
        }
        _ => ctx.say("Invalid command.")?,
    }
    Ok(Flow::Continue)
}

fn arg(args: &[String], index: usize, usage: &'static str) -> Result<String> {
    args.get(index)
        .cloned()
        .ok_or_else(|| insufficient_arguments(usage))
}

fn help_text() -> String {
    let width = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0) + 2;
    let mut lines = vec!["Available commands:".to_string(), String::new()];
    lines.extend(
        HELP.iter()
            .map(|(usage, description)| format!("  {:<width$} {}", usage, description)),
    );
    lines.join("\n")
}
