use super::*;

use crate::prelude::{Contact, ContactPatch, JsonStorage, first_match_index, search_contacts};
use crate::storage::storage_port::{read_contacts_from_csv, write_contacts_to_csv};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Result of an update or delete that targets a contact by term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Owns the ordered contact list and writes all of it back to storage after
/// every change.
///
/// If a save fails the in-memory change is undone before the error is
/// returned, so the list always mirrors what was last stored.
pub struct ContactBook {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactBook {
    /// Opens the JSON contact file at `path`. A missing file starts an empty book.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::with_storage(Box::new(JsonStorage::new(path)))
    }

    pub fn with_storage(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let contacts = storage.load()?;
        debug!(
            "loaded {} contacts from {} storage",
            contacts.len(),
            storage.get_medium()
        );

        Ok(Self { contacts, storage })
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.contacts)?;
        debug!(
            "saved {} contacts to {} storage",
            self.contacts.len(),
            self.storage.get_medium()
        );
        Ok(())
    }

    fn save_or_rollback<F>(&mut self, rollback: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Vec<Contact>),
    {
        if let Err(err) = self.save() {
            warn!("save failed, discarding unsaved change: {err}");
            rollback(&mut self.contacts);
            return Err(err);
        }
        Ok(())
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<(), AppError> {
        self.add_contact(Contact::new(name, phone, email, address))
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        self.contacts.push(contact);
        self.save_or_rollback(|contacts| {
            contacts.pop();
        })?;

        info!("added contact #{}", self.contacts.len());
        Ok(())
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        search_contacts(&self.contacts, term)
    }

    /// Applies `patch` to the first contact matching `term`.
    ///
    /// An empty patch still counts as an update and is saved.
    pub fn update_contact(&mut self, term: &str, patch: ContactPatch) -> Result<Outcome, AppError> {
        let Some(index) = first_match_index(&self.contacts, term) else {
            return Ok(Outcome::NotFound);
        };

        let previous = self.contacts[index].clone();
        self.contacts[index].apply(patch);
        self.save_or_rollback(|contacts| contacts[index] = previous)?;

        info!("updated contact at position {}", index + 1);
        Ok(Outcome::Applied)
    }

    /// Removes the first contact matching `term`. Later matches are kept.
    pub fn delete_contact(&mut self, term: &str) -> Result<Outcome, AppError> {
        let Some(index) = first_match_index(&self.contacts, term) else {
            return Ok(Outcome::NotFound);
        };

        let removed = self.contacts.remove(index);
        self.save_or_rollback(|contacts| contacts.insert(index, removed))?;

        info!("deleted contact at position {}", index + 1);
        Ok(Outcome::Applied)
    }

    /// Appends every contact in the CSV file and saves once. Returns how many
    /// were imported.
    pub fn import_csv(&mut self, src: &Path) -> Result<usize, AppError> {
        let imported = read_contacts_from_csv(src)?;
        let total = imported.len();
        let before = self.contacts.len();

        self.contacts.extend(imported);
        self.save_or_rollback(|contacts| contacts.truncate(before))?;

        info!("imported {total} contacts from {}", src.display());
        Ok(total)
    }

    /// Writes the current list to a CSV file and returns the file actually
    /// written with the number of contacts in it.
    pub fn export_csv(&self, dest: &Path) -> Result<(PathBuf, usize), AppError> {
        let path = write_contacts_to_csv(&self.contacts, dest)?;

        info!("exported {} contacts to {}", self.contacts.len(), path.display());
        Ok((path, self.contacts.len()))
    }
}
