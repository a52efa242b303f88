pub mod memory;
pub mod storage_port;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::io;
use std::path::Path;

/// Durable home of the full, ordered contact sequence.
pub trait ContactStore {
    /// Returns every stored contact in order. A store that has never been
    /// written loads as empty.
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces the stored sequence with `contacts`.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
