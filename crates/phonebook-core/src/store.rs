//! Contact registry: id -> contact mapping plus the id counter.
//!
//! Handlers run concurrently on the tokio runtime, so the mapping is a
//! `DashMap` and ids come from an `AtomicU64`. `fetch_add` hands every create
//! a distinct id and the counter never moves backwards, deletes included.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::error::{PhonebookError, Result};
use crate::model::{Contact, ContactId, NewContact};

/// Storage seam used by the HTTP layer.
pub trait ContactStore: Send + Sync {
    /// Allocate the next id and store the contact under it.
    fn create(&self, new: NewContact) -> Contact;
    fn get(&self, id: ContactId) -> Result<Contact>;
    /// Remove the contact. A miss leaves the collection unchanged.
    fn delete(&self, id: ContactId) -> Result<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime registry. Nothing is persisted.
pub struct InMemoryContactStore {
    contacts: DashMap<ContactId, Contact>,
    next_id: AtomicU64,
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self {
            contacts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl ContactStore for InMemoryContactStore {
    fn create(&self, new: NewContact) -> Contact {
        let id = ContactId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let contact = Contact { id, name: new.name, phone: new.phone };
        self.contacts.insert(id, contact.clone());
        tracing::debug!(%id, "contact stored");
        contact
    }

    fn get(&self, id: ContactId) -> Result<Contact> {
        self.contacts
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| PhonebookError::NotFound(id.to_string()))
    }

    fn delete(&self, id: ContactId) -> Result<()> {
        self.contacts
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PhonebookError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
