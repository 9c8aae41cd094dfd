//! Top-level facade crate for the phonebook service.
//!
//! Re-exports the domain types and the server library so users can depend on a single crate.

pub mod core {
    pub use phonebook_core::*;
}

pub mod server {
    pub use phonebook_server::*;
}
