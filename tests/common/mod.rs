#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Binary invocation bound to a private contact file.
pub fn contact_book(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACT_BOOK_PATH", file).env_remove("RUST_LOG");
    cmd
}

pub fn add(file: &Path, name: &str, phone: &str, email: &str, address: &str) {
    contact_book(file)
        .args([
            "add", "--name", name, "--phone", phone, "--email", email, "--address", address,
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact added successfully"));
}
