//! Phonebook server library entry.
//!
//! This crate wires the contact registry from `phonebook-core` into an axum
//! HTTP surface. It is consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod http_error;
pub mod ops;
pub mod router;
