//! HTTP handlers.

pub mod contacts;

use crate::http_error::ApiError;
use phonebook_core::PhonebookError;

/// Fallback for unrouted paths.
pub async fn not_found() -> ApiError {
    ApiError(PhonebookError::NoRoute)
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError(PhonebookError::MethodNotAllowed)
}
