//! Phonebook core: the contact model, the registry, and the shared error type.
//!
//! This crate holds everything the HTTP surface delegates to. It carries no
//! transport or runtime dependencies so the registry can be exercised directly
//! from tests and reused behind any front end.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `PhonebookError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{ClientCode, PhonebookError, Result};
pub use model::{Contact, ContactId, CreateContactRequest, NewContact};
pub use store::{ContactStore, InMemoryContactStore};
