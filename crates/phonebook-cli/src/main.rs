mod commands;
mod error;
mod session;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{birthdays, contacts, Context};
use crate::error::{exit_code_for, report_error};
use phonebook_config as config;
use phonebook_store::paths;

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "Contact book with birthday reminders")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a contact, or a phone to an existing contact
    Add(contacts::AddArgs),
    /// Replace one of a contact's phones
    Change(contacts::ChangeArgs),
    #[command(name = "remove-phone")]
    RemovePhone(contacts::RemovePhoneArgs),
    Phone(contacts::PhoneArgs),
    All,
    Delete(contacts::DeleteArgs),
    #[command(name = "add-birthday")]
    AddBirthday(birthdays::AddBirthdayArgs),
    #[command(name = "show-birthday")]
    ShowBirthday(birthdays::ShowBirthdayArgs),
    /// Contacts to congratulate in the coming days
    Birthdays(birthdays::BirthdaysArgs),
    /// Interactive session (the default)
    Repl,
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Change(_)
                | Command::RemovePhone(_)
                | Command::Delete(_)
                | Command::AddBirthday(_)
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose: _,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    match config::resolve_config_path(config_path) {
        Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
        Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
        Err(err) => debug!(error = %err, "config unavailable"),
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), "database path resolved");

    let (store, mut book) = phonebook_store::load(&db_path)
        .with_context(|| format!("open address book {}", db_path.display()))?;
    debug!(contacts = book.len(), "address book loaded");

    let command = command.unwrap_or(Command::Repl);
    if let Command::Repl = command {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        return session::run_session(&store, &mut book, &app_config, stdin.lock(), &mut stdout);
    }

    let mutates = command.mutates();
    let mut stdout = io::stdout().lock();
    let mut ctx = Context {
        book: &mut book,
        out: &mut stdout,
        json,
        config: &app_config,
    };

    match command {
        Command::Add(args) => contacts::add_contact(&mut ctx, args),
        Command::Change(args) => contacts::change_phone(&mut ctx, args),
        Command::RemovePhone(args) => contacts::remove_phone(&mut ctx, args),
        Command::Phone(args) => contacts::show_phones(&mut ctx, args),
        Command::All => contacts::show_all(&mut ctx),
        Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
        Command::AddBirthday(args) => birthdays::add_birthday(&mut ctx, args),
        Command::ShowBirthday(args) => birthdays::show_birthday(&mut ctx, args),
        Command::Birthdays(args) => birthdays::upcoming_birthdays(&mut ctx, args),
        Command::Repl => unreachable!("repl handled before dispatch"),
    }?;

    if mutates {
        store
            .save_book(&book)
            .with_context(|| format!("save address book {}", db_path.display()))?;
        debug!(contacts = book.len(), "address book saved");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
