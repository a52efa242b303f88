use crate::prelude::Contact;

impl Contact {
    /// A term refers to a contact when it is a case-insensitive substring of
    /// the name, or a case-sensitive substring of the phone number.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}

pub fn search_contacts<'a>(contact_list: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    contact_list.iter().filter(|c| c.matches(term)).collect()
}

pub fn first_match_index(contact_list: &[Contact], term: &str) -> Option<usize> {
    contact_list.iter().position(|c| c.matches(term))
}
