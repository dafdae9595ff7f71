//! Person use-case service.
//!
//! # Responsibility
//! - Provide the store entry points used by the driver: async retrieval,
//!   lookup by email and guarded insertion.
//! - Delegate collection mechanics to repository implementations.
//!
//! # Invariants
//! - `add_person` appends only when no record shares the email (linear scan
//!   at insertion time, not a structural guarantee).
//! - A rejected insertion never mutates the collection.

use crate::model::person::Person;
use crate::repo::person_repo::{InMemoryPersonRepository, PersonRepository};
use log::{debug, info, warn};
use std::time::Duration;

/// Simulated latency of `get_all`.
pub const DEFAULT_RETRIEVAL_DELAY: Duration = Duration::from_millis(100);

/// Use-case service wrapper for person records.
pub struct PersonService<R: PersonRepository> {
    repo: R,
    retrieval_delay: Duration,
}

impl PersonService<InMemoryPersonRepository> {
    /// Creates a service over the three fixed seed records.
    pub fn seeded() -> Self {
        Self::new(InMemoryPersonRepository::seeded())
    }
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self::with_delay(repo, DEFAULT_RETRIEVAL_DELAY)
    }

    /// Creates a service with a custom simulated retrieval delay.
    pub fn with_delay(repo: R, retrieval_delay: Duration) -> Self {
        Self {
            repo,
            retrieval_delay,
        }
    }

    /// Returns a snapshot of all records after the simulated delay.
    ///
    /// Suspends on the tokio timer; performs no I/O.
    pub async fn get_all(&self) -> Vec<Person> {
        tokio::time::sleep(self.retrieval_delay).await;
        let people = self.repo.list_people().to_vec();
        info!(
            "event=people_fetch module=service status=ok count={}",
            people.len()
        );
        people
    }

    /// Returns the first record with exactly this email.
    pub fn find_by_email(&self, email: &str) -> Option<&Person> {
        let found = self.repo.find_by_email(email);
        match found {
            Some(person) => debug!(
                "event=person_lookup module=service status=found email={} name={}",
                email, person.name
            ),
            None => debug!(
                "event=person_lookup module=service status=not_found email={}",
                email
            ),
        }
        found
    }

    /// Appends `person` unless its email is already present.
    ///
    /// # Contract
    /// - Returns `false` and logs a warning on a duplicate email.
    /// - Returns `true` after appending otherwise.
    pub fn add_person(&mut self, person: Person) -> bool {
        if self.find_by_email(&person.email).is_some() {
            warn!(
                "event=person_add module=service status=rejected reason=duplicate_email email={}",
                person.email
            );
            return false;
        }

        info!(
            "event=person_add module=service status=ok name={}",
            person.name
        );
        self.repo.append(person);
        true
    }

    /// Records with adult status, in insertion order.
    pub fn adults(&self) -> Vec<&Person> {
        self.repo
            .list_people()
            .iter()
            .filter(|person| person.is_adult())
            .collect()
    }

    /// Case-insensitive substring match on name, in insertion order.
    pub fn search_by_name(&self, query: &str) -> Vec<&Person> {
        let needle = query.to_lowercase();
        self.repo
            .list_people()
            .iter()
            .filter(|person| person.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.repo.list_people().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list_people().is_empty()
    }
}
