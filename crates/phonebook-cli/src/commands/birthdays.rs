use crate::commands::contacts::respond_with_record;
use crate::commands::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use phonebook_core::domain::Name;
use phonebook_core::dto::UpcomingBirthdayDto;
use phonebook_core::rules::UPCOMING_WINDOW_DAYS;
use phonebook_core::time::{format_date, local_today, parse_date};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct AddBirthdayArgs {
    pub name: String,
    #[arg(value_name = "DD.MM.YYYY")]
    pub birthday: String,
}

#[derive(Debug, Args)]
pub struct ShowBirthdayArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct BirthdaysArgs {
    /// Evaluate as if today were this date
    #[arg(long, value_name = "DD.MM.YYYY")]
    pub today: Option<String>,
    /// Window size in days (defaults to `upcoming_days` from the config)
    #[arg(long)]
    pub days: Option<i64>,
}

#[derive(Debug, Serialize)]
struct BirthdayReport<'a> {
    name: &'a str,
    birthday: Option<String>,
}

pub fn add_birthday(ctx: &mut Context<'_>, args: AddBirthdayArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    ctx.book
        .require_mut(name.as_str())?
        .add_birthday(&args.birthday)
        .with_context(|| format!("set birthday for {}", name))?;
    respond_with_record(ctx, name.as_str(), "Birthday added.")
}

pub fn show_birthday(ctx: &mut Context<'_>, args: ShowBirthdayArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    let birthday = ctx.book.require(name.as_str())?.birthday();

    if ctx.json {
        return ctx.print_json(&BirthdayReport {
            name: name.as_str(),
            birthday: birthday.map(|value| value.to_string()),
        });
    }
    match birthday {
        Some(value) => ctx.say(format!("{}: {}", name, value)),
        None => ctx.say(format!("No birthday set for {}.", name)),
    }
}

pub fn upcoming_birthdays(ctx: &mut Context<'_>, args: BirthdaysArgs) -> Result<()> {
    let today = match args.today.as_deref() {
        Some(raw) => parse_date(raw).with_context(|| format!("parse --today {}", raw))?,
        None => local_today(),
    };
    let days = args.days.unwrap_or(ctx.config.upcoming_days);
    let upcoming = ctx.book.upcoming_birthdays_within(today, days)?;

    if ctx.json {
        let dtos: Vec<UpcomingBirthdayDto> =
            upcoming.iter().map(UpcomingBirthdayDto::from).collect();
        return ctx.print_json(&dtos);
    }

    if upcoming.is_empty() {
        let window = if days == UPCOMING_WINDOW_DAYS {
            "the next week".to_string()
        } else {
            format!("the next {} days", days)
        };
        return ctx.say(format!("No upcoming birthdays in {}.", window));
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(
        upcoming
            .iter()
            .map(|item| format!("  {}: {}", item.name, format_date(item.congratulation_date))),
    );
    ctx.say(lines.join("\n"))
}
