use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Keeps contacts in process memory only. Clones share the same data, so a
/// caller can hand one clone to a `ContactBook` and inspect another.
#[derive(Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<Vec<Contact>>>,
    saves: Rc<Cell<usize>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Rc::new(RefCell::new(contacts)),
            saves: Rc::new(Cell::new(0)),
        }
    }

    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
