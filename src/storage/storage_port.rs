use super::*;

use csv::{ReaderBuilder, WriterBuilder};
use std::path::PathBuf;

const CSV_HEADER: [&str; 4] = ["name", "phone", "email", "address"];
const EXPORT_FILE_NAME: &str = "contacts.csv";

pub fn read_contacts_from_csv(src: &Path) -> Result<Vec<Contact>, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if src.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(src)?;

    let mut contacts = Vec::new();
    for result in reader.deserialize() {
        let record: Contact = result?;
        contacts.push(record);
    }

    Ok(contacts)
}

/// Resolves where an export lands: a directory gets `contacts.csv` inside it,
/// anything else must name a `.csv` file.
pub fn resolve_export_path(dest: &Path) -> Result<PathBuf, AppError> {
    if dest.is_dir() {
        return Ok(dest.join(EXPORT_FILE_NAME));
    }

    if dest.extension().is_some_and(|ext| ext == "csv") {
        Ok(dest.to_path_buf())
    } else {
        Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ))
    }
}

pub fn write_contacts_to_csv(contacts: &[Contact], dest: &Path) -> Result<PathBuf, AppError> {
    let file_path = resolve_export_path(dest)?;
    create_file_parent(&file_path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&file_path)?;

    // Header is written by hand so an empty export still carries it
    writer.write_record(CSV_HEADER)?;
    for contact in contacts {
        writer.serialize(contact)?;
    }

    writer.flush()?;

    Ok(file_path)
}
