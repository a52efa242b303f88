pub use crate::cli::{command, menu, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactPatch},
    manager::{ContactBook, Outcome},
    search::{first_match_index, search_contacts},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore, memory::MemStorage,
    stores::{JsonStorage, STORAGE_PATH},
};
