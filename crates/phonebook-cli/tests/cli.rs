use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn command_output(home: &Path, args: &[&str]) -> Output {
    let db_path = home.join("phonebook.sqlite3");
    cargo_bin_cmd!("phonebook")
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .args(["--db-path", db_path.to_str().expect("db path")])
        .args(args)
        .output()
        .expect("run command")
}

fn run_cmd(home: &Path, args: &[&str]) -> String {
    let output = command_output(home, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(home: &Path, args: &[&str]) -> Value {
    let mut with_json = vec!["--json"];
    with_json.extend_from_slice(args);
    let output = command_output(home, &with_json);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_add_change_and_list_flow() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    assert_eq!(run_cmd(home, &["add", "Ada", "(415) 555-1212"]), "Contact added.\n");
    assert_eq!(run_cmd(home, &["add", "Ada", "2125550000"]), "Contact updated.\n");
    run_cmd(home, &["change", "Ada", "4155551212", "3105550000"]);
    run_cmd(home, &["add-birthday", "Ada", "10.12.1815"]);
    run_cmd(home, &["add", "Bob"]);

    assert_eq!(
        run_cmd(home, &["all"]),
        "Contact name: Ada, phones: 3105550000; 2125550000, birthday: 10.12.1815\n\
         Contact name: Bob, phones: \n"
    );

    let list = run_cmd_json(home, &["all"]);
    let items = list.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Ada");
    assert_eq!(items[0]["phones"][0], "3105550000");
    assert_eq!(items[0]["birthday"], "10.12.1815");
    assert!(items[1]["birthday"].is_null());
}

#[test]
fn cli_birthdays_shift_weekends() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    for (name, birthday) in [
        ("Ann", "12.03.2025"),
        ("Bob", "15.03.2025"),
        ("Cid", "01.01.2000"),
    ] {
        run_cmd(home, &["add", name]);
        run_cmd(home, &["add-birthday", name, birthday]);
    }

    let output = run_cmd(home, &["birthdays", "--today", "10.03.2025"]);
    assert_eq!(
        output,
        "Upcoming birthdays:\n  Ann: 12.03.2025\n  Bob: 17.03.2025\n"
    );

    let upcoming = run_cmd_json(home, &["birthdays", "--today", "10.03.2025"]);
    let items = upcoming.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["birthday"], "15.03.2025");
    assert_eq!(items[1]["congratulation_date"], "17.03.2025");
    assert_eq!(items[1]["days_until"], 5);

    let none = run_cmd(home, &["birthdays", "--today", "01.06.2025"]);
    assert_eq!(none, "No upcoming birthdays in the next week.\n");
}

#[test]
fn cli_reports_errors_with_exit_codes() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    let invalid = command_output(home, &["add", "Ada", "555-1212"]);
    assert_eq!(invalid.status.code(), Some(3));
    let stderr = String::from_utf8(invalid.stderr).expect("utf8");
    assert!(stderr.contains("Phone number must contain exactly 10 digits"));

    let missing = command_output(home, &["phone", "Ada"]);
    assert_eq!(missing.status.code(), Some(2));

    run_cmd(home, &["add", "Ada", "4155551212"]);
    let missing_phone = command_output(home, &["remove-phone", "Ada", "2125550000"]);
    assert_eq!(missing_phone.status.code(), Some(2));

    let bad_date = command_output(home, &["add-birthday", "Ada", "31.02.2000"]);
    assert_eq!(bad_date.status.code(), Some(3));
    assert_eq!(run_cmd(home, &["show-birthday", "Ada"]), "No birthday set for Ada.\n");
}

#[test]
fn cli_repl_session_persists_on_exit() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();
    let db_path = home.join("phonebook.sqlite3");

    let output = cargo_bin_cmd!("phonebook")
        .env("XDG_CONFIG_HOME", home)
        .args(["--db-path", db_path.to_str().expect("db path")])
        .write_stdin("add Ada 4155551212\nadd-birthday Ada 29.02.2000\nexit\n")
        .output()
        .expect("run repl");
    assert!(output.status.success(), "repl failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Contact added."));
    assert!(stdout.contains("Good bye!"));

    assert_eq!(run_cmd(home, &["phone", "Ada"]), "Ada: 4155551212\n");
    assert_eq!(run_cmd(home, &["show-birthday", "Ada"]), "Ada: 29.02.2000\n");
}

#[test]
fn cli_delete_contact() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    run_cmd(home, &["add", "Ada"]);
    assert_eq!(run_cmd(home, &["delete", "Ada"]), "Contact deleted.\n");
    assert_eq!(run_cmd(home, &["all"]), "No contacts in address book.\n");
    assert_eq!(command_output(home, &["delete", "Ada"]).status.code(), Some(2));
}

#[test]
fn cli_trims_names_in_every_command() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    assert_eq!(run_cmd(home, &["add", " Ada", "4155551212"]), "Contact added.\n");
    assert_eq!(run_cmd(home, &["add", "Ada ", "2125550000"]), "Contact updated.\n");
    assert_eq!(
        run_cmd(home, &["phone", " Ada"]),
        "Ada: 4155551212, 2125550000\n"
    );
    run_cmd(home, &["change", " Ada ", "2125550000", "3105550000"]);
    run_cmd(home, &["remove-phone", "\tAda", "4155551212"]);
    run_cmd(home, &["add-birthday", "Ada\t", "10.12.1815"]);
    assert_eq!(run_cmd(home, &["show-birthday", " Ada"]), "Ada: 10.12.1815\n");
    assert_eq!(
        run_cmd(home, &["all"]),
        "Contact name: Ada, phones: 3105550000, birthday: 10.12.1815\n"
    );

    let blank = command_output(home, &["phone", "  "]);
    assert_eq!(blank.status.code(), Some(3));

    assert_eq!(run_cmd(home, &["delete", " Ada "]), "Contact deleted.\n");
    assert_eq!(run_cmd(home, &["all"]), "No contacts in address book.\n");
}

#[test]
fn cli_rejects_padded_birthday() {
    let temp = TempDir::new().expect("temp dir");
    let home = temp.path();

    run_cmd(home, &["add", "Ada"]);
    let padded = command_output(home, &["add-birthday", "Ada", " 12.03.2025\t"]);
    assert_eq!(padded.status.code(), Some(3));
    assert_eq!(run_cmd(home, &["show-birthday", "Ada"]), "No birthday set for Ada.\n");
}
