use crate::error::Result;
use crate::filter::Order;
use crate::model::Contact;
use crate::store::RecordStore;

/// Address book keyed by phone number.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: RecordStore<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> Result<&Contact> {
        self.contacts.insert(Contact::new(name.trim(), phone.trim(), email.trim()))
    }

    pub fn search_by_name(&self, query: &str) -> Vec<&Contact> {
        self.contacts.find_containing(|c| c.name.as_str(), query).collect()
    }

    /// Alphabetical by name, ignoring case.
    pub fn all_sorted(&self) -> Vec<&Contact> {
        self.contacts.sorted_by(|c| c.name.to_lowercase(), Order::Ascending)
    }

    pub fn favorites(&self) -> Vec<&Contact> {
        self.contacts.find_by(|c| c.favorite).collect()
    }

    pub fn delete(&mut self, phone: &str) -> Result<()> {
        self.contacts.delete_by_key(phone.trim())
    }

    pub fn toggle_favorite(&mut self, phone: &str) -> Result<bool> {
        self.contacts.toggle_flag(phone.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn book() -> ContactBook {
        let mut book = ContactBook::new();
        book.add("Marta Ruiz", "600111222", "marta@mail.com").unwrap();
        book.add("ana López", "600333444", "ana@mail.com").unwrap();
        book.add("Bruno", "611222333", "bruno@mail.es").unwrap();
        book
    }

    #[test]
    fn second_contact_with_same_phone_is_rejected() {
        let mut book = book();
        let err = book.add("Otra Marta", "600111222", "otra@mail.com").unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn sorted_ignores_case() {
        let book = book();
        let names: Vec<_> = book.all_sorted().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["ana López", "Bruno", "Marta Ruiz"]);
    }

    #[test]
    fn favorites_follow_toggles() {
        let mut book = book();
        assert!(book.toggle_favorite("611222333").unwrap());
        assert_eq!(book.favorites().len(), 1);
        assert!(!book.toggle_favorite("611222333").unwrap());
        assert!(book.favorites().is_empty());
        assert!(matches!(book.toggle_favorite("000000000"), Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_by_phone() {
        let mut book = book();
        book.delete("600333444").unwrap();
        assert!(book.search_by_name("ana").is_empty());
        assert!(matches!(book.delete("600333444"), Err(Error::NotFound(_))));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn invalid_fields_do_not_land() {
        let mut book = ContactBook::new();
        assert!(matches!(book.add("", "600111222", "a@b.c"), Err(Error::Validation { field: "name", .. })));
        assert!(matches!(book.add("X", "12", "a@b.c"), Err(Error::Validation { field: "phone", .. })));
        assert!(matches!(book.add("X", "600111222", "nope"), Err(Error::Validation { field: "email", .. })));
        assert!(book.is_empty());
    }
}
