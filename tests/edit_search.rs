mod common;

use common::{add, contact_book};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn edit_search() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    add(&file, "Ana Silva", "111", "ana@example.com", "Rua Augusta");
    add(&file, "Bob", "222", "bob@old.com", "Elm Road");

    // Name search ignores case
    contact_book(&file)
        .args(["search", "ANA SILVA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ana Silva").and(predicate::str::contains("Bob").not()));

    // Phone search
    contact_book(&file)
        .args(["search", "222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Bob").and(predicate::str::contains("Ana").not()));

    // Only the email changes
    contact_book(&file)
        .args(["update", "Bob", "--email", "b@x.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    contact_book(&file)
        .args(["search", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Bob, Phone: 222, Email: b@x.com, Address: Elm Road",
        ));
    Ok(())
}

#[test]
fn update_can_clear_a_field() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    add(&file, "Bob", "222", "bob@old.com", "Elm Road");

    contact_book(&file)
        .args(["update", "222", "--address", ""])
        .assert()
        .success();

    contact_book(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Bob, Phone: 222, Email: bob@old.com, Address: \n",
        ));
    Ok(())
}

#[test]
fn search_without_hits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    add(&file, "Bob", "222", "", "");

    contact_book(&file)
        .args(["search", "zelda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
    Ok(())
}

#[test]
fn update_missing_contact_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    add(&file, "Bob", "222", "", "");

    contact_book(&file)
        .args(["update", "nonexistent", "--name", "X"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Contact not found."));

    contact_book(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Bob, Phone: 222"));
    Ok(())
}
