mod common;

use common::{add, contact_book};
use predicates::str::contains;
use std::fs;
use tempfile::tempdir;

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    add(&file, "Alice", "08031234567", "alice@example.com", "4 Broad Street, Lagos");

    // Export to a temporary CSV file
    let out_path = dir.path().join("out.csv");

    contact_book(&file)
        .arg("export")
        .arg("--dest")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully exported 1 contacts"));

    let exported = fs::read_to_string(&out_path)?;
    assert!(exported.starts_with("name,phone,email,address"));
    assert!(exported.contains("Alice"));

    // Import into a second book
    let other = dir.path().join("other.json");

    contact_book(&other)
        .arg("import")
        .arg("--src")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts"));

    contact_book(&other)
        .arg("list")
        .assert()
        .success()
        .stdout(contains(
            "Name: Alice, Phone: 08031234567, Email: alice@example.com, Address: 4 Broad Street, Lagos",
        ));
    Ok(())
}

#[test]
fn export_into_directory() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");
    add(&file, "Alice", "08031234567", "", "");

    contact_book(&file)
        .arg("export")
        .arg("--dest")
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("contacts.csv").exists());
    Ok(())
}

#[test]
fn import_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)
        .arg("import")
        .arg("--src")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(contains("CSV file Not found"));
    Ok(())
}
