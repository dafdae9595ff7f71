//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered person collection for one session.
//! - Keep lookup and append mechanics out of the service layer.
//!
//! # Invariants
//! - Insertion order is preserved; records are only ever appended.
//! - Lookups are exact, case-sensitive email comparisons returning the first
//!   match.
//! - The repository itself does not reject duplicate emails.

use crate::model::person::Person;

/// Repository interface for person storage.
pub trait PersonRepository {
    /// Returns every record in insertion order.
    fn list_people(&self) -> &[Person];
    /// Returns the first record whose email equals `email`.
    fn find_by_email(&self, email: &str) -> Option<&Person>;
    /// Appends `person` to the end of the collection.
    fn append(&mut self, person: Person);
}

/// Vec-backed person repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    people: Vec<Person>,
}

impl InMemoryPersonRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `people` as-is. Duplicates are kept.
    pub fn with_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Creates a repository with the three fixed session seed records.
    pub fn seeded() -> Self {
        Self::with_people(seed_people())
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn list_people(&self) -> &[Person] {
        &self.people
    }

    fn find_by_email(&self, email: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.email == email)
    }

    fn append(&mut self, person: Person) {
        self.people.push(person);
    }
}

/// Fixed seed records every session starts with.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("Alice Johnson", 30, "alice@example.com"),
        Person::new("Bob Smith", 25, "bob@test.org"),
        Person::new("Carol Davis", 35, "carol@company.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{InMemoryPersonRepository, PersonRepository};
    use crate::model::person::Person;

    #[test]
    fn find_by_email_returns_first_of_duplicates() {
        let repo = InMemoryPersonRepository::with_people(vec![
            Person::new("First", 20, "dup@x.org"),
            Person::new("Second", 40, "dup@x.org"),
        ]);

        let found = repo.find_by_email("dup@x.org").unwrap();
        assert_eq!(found.name, "First");
    }

    #[test]
    fn find_by_email_is_case_sensitive() {
        let repo = InMemoryPersonRepository::seeded();
        assert!(repo.find_by_email("ALICE@example.com").is_none());
        assert!(repo.find_by_email("alice@example.com").is_some());
    }
}
