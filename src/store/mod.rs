//! Contact storage port.
//!
//! Handlers talk to storage only through [`ContactStore`]. Adapters map their
//! failures onto [`StoreError`], keeping "no such record" distinct from every
//! other failure so handlers can answer `404` versus `500`.

use async_trait::async_trait;

use crate::contact::{Contact, ContactId, NewContact};

mod memory;

pub use memory::MemoryStore;

/// Errors surfaced by a [`ContactStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No contact exists for the requested id.
    #[error("no matching record found")]
    NoRecord,
    /// Any other storage failure.
    #[error("contact store failure: {0}")]
    Other(String),
}

/// CRUD access to contacts, keyed by integer id.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch one contact.
    async fn get(&self, id: ContactId) -> Result<Contact, StoreError>;

    /// Fetch every contact, ordered by id.
    async fn find_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Store a new contact and return its assigned id.
    async fn insert(&self, fields: NewContact) -> Result<ContactId, StoreError>;

    /// Replace every field of an existing contact.
    ///
    /// Returns the id the contact is now stored under; adapters usually echo
    /// `id` back.
    async fn update(&self, id: ContactId, fields: NewContact) -> Result<ContactId, StoreError>;

    /// Remove a contact, returning the id that was removed.
    async fn delete(&self, id: ContactId) -> Result<ContactId, StoreError>;

    /// Report whether the backend can serve requests. Used by readiness.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
