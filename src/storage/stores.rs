use super::*;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub const STORAGE_PATH: &str = "contacts.json";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ContactFile<'a> {
    version: u32,
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
struct StoredContactFile {
    version: u32,
    contacts: Vec<Contact>,
}

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn write_atomically(&self, data: &[u8]) -> io::Result<()> {
        create_file_parent(&self.path)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Written beside the target so the final rename stays on one filesystem
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(data)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(STORAGE_PATH)
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(AppError::corrupt(&self.path, e));
            }
            Err(e) => return Err(e.into()),
        };

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value =
            serde_json::from_str(&data).map_err(|e| AppError::corrupt(&self.path, e))?;

        if value.is_object() {
            let file: StoredContactFile =
                serde_json::from_value(value).map_err(|e| AppError::corrupt(&self.path, e))?;

            if file.version != FORMAT_VERSION {
                return Err(AppError::corrupt(
                    &self.path,
                    format!("unsupported format version {}", file.version),
                ));
            }
            Ok(file.contacts)
        } else if value.is_array() {
            // Unversioned list of contacts, upgraded on the next save
            serde_json::from_value(value).map_err(|e| AppError::corrupt(&self.path, e))
        } else {
            Err(AppError::corrupt(
                &self.path,
                "expected an object or an array",
            ))
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let file = ContactFile {
            version: FORMAT_VERSION,
            contacts,
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::persist(&self.path, io::Error::other(e)))?;

        self.write_atomically(json.as_bytes())
            .map_err(|e| AppError::persist(&self.path, e))
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
