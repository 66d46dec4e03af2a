#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn goblin(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("goblin"));
    cmd.env("GOBLIN_HOME", home.path().as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("GOBLIN_LOG");
    cmd
}

fn add(home: &TempDir, text: &str) {
    goblin(home).args(["add", text]).assert().success();
}

#[test]
fn add_then_list() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .args(["add", "peanut", "butter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: peanut butter"))
        .stdout(predicate::str::contains("1 item to hunt"));

    add(&home, "milk");
    goblin(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] peanut butter"))
        .stdout(predicate::str::contains("2. [ ] milk"))
        .stdout(predicate::str::contains("2 items to hunt"));

    assert!(home.path().join("goblinItems.json").exists());
}

#[test]
fn blank_add_is_rejected() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("The goblin needs SOMETHING to eat!"));

    goblin(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("The goblin's belly is empty"));
}

#[test]
fn toggle_and_delete_by_position_and_text() {
    let home = TempDir::new().unwrap();
    add(&home, "milk");
    add(&home, "eggs");

    goblin(&home)
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] milk"))
        .stdout(predicate::str::contains("1 item to hunt"));

    goblin(&home)
        .args(["rm", "EGG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: eggs"));

    goblin(&home)
        .args(["toggle", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No item matches 7"));
}

#[test]
fn clear_asks_first() {
    let home = TempDir::new().unwrap();

    // Nothing to clear: no prompt at all.
    goblin(&home)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure").not());

    add(&home, "milk");
    goblin(&home)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The goblin will forget everything! Are you sure?",
        ))
        .stdout(predicate::str::contains("Operation cancelled."));

    goblin(&home)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The goblin's belly is empty"));
}

#[test]
fn share_then_open_elsewhere() {
    let sender = TempDir::new().unwrap();
    let receiver = TempDir::new().unwrap();

    goblin(&sender)
        .arg("share")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The goblin has nothing to share! Add some items first.",
        ));

    add(&sender, "milk");
    add(&sender, "50% cocoa");
    let output = goblin(&sender)
        .args(["share", "--sms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grocery Goblin Shopping List:"))
        .stdout(predicate::str::contains("[ ] 50% cocoa"))
        .stdout(predicate::str::contains("sms:?body="))
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let link = stdout
        .lines()
        .find(|line| line.starts_with("https://grocery-goblin.app/?list="))
        .unwrap()
        .to_string();

    add(&receiver, "bread");
    goblin(&receiver)
        .args(["open", &link])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A goblin sent you 2 item(s)!"))
        .stdout(predicate::str::contains("Link: https://grocery-goblin.app/"))
        .stdout(predicate::str::contains("3. [ ] 50% cocoa"));
}

#[test]
fn open_ignores_a_broken_link() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .args(["open", "https://grocery-goblin.app/?list=%5Bnope", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("couldn't make sense"));
}

#[test]
fn voice_commands_from_arguments() {
    let home = TempDir::new().unwrap();
    add(&home, "milk");
    add(&home, "eggs");

    goblin(&home)
        .args(["voice", "remove", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: milk"));

    goblin(&home)
        .args(["voice", "had", "bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: bread"));

    goblin(&home)
        .args(["voice", "remove", "kale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Couldn't find: kale"));

    goblin(&home)
        .args(["voice", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Heard: \"buy milk\" - try \"add [item]\" or \"remove [item]\"",
        ));
}

#[test]
fn voice_listens_on_stdin() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .arg("voice")
        .write_stdin("Add Bread\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Listening..."))
        .stdout(predicate::str::contains("1. [ ] bread"));
}

#[test]
fn voice_can_be_switched_off() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .args(["config", "voice", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voice set to false"));

    goblin(&home)
        .arg("voice")
        .assert()
        .success()
        .stdout(predicate::str::contains("Voice recognition is not supported"));
}

#[test]
fn corrupt_list_starts_empty() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("goblinItems.json"), "{ not json").unwrap();

    goblin(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("The goblin's belly is empty"));
}

#[test]
fn config_rejects_bad_values() {
    let home = TempDir::new().unwrap();

    goblin(&home)
        .args(["config", "share-base-url", "ftp://nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("share-base-url must be an http(s) URL"));

    goblin(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("share-base-url = https://grocery-goblin.app/"));
}
