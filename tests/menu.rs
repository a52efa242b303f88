mod common;

use common::contact_book;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn interactive_session_persists() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)
        .write_stdin("1\nAna Silva\n111\nana@example.com\nRua Augusta\n2\n6\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Contact added.")
                .and(predicate::str::contains("Name: Ana Silva, Phone: 111")),
        );

    contact_book(&file)
        .arg("menu")
        .write_stdin("5\nana\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted.").and(predicate::str::contains("No contacts found.")));
    Ok(())
}
