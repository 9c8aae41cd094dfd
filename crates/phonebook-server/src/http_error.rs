//! HTTP error mapping for the contact API.
//!
//! Every failure is answered with a JSON body `{"error": "<message>"}`. The
//! message is the `Display` of the core error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use phonebook_core::error::PhonebookError;

/// Server-side wrapper so the core error can become an axum response.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PhonebookError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            PhonebookError::NotFound(_) | PhonebookError::NoRoute => StatusCode::NOT_FOUND,
            PhonebookError::MissingField(_) | PhonebookError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            PhonebookError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            PhonebookError::UnsupportedVersion | PhonebookError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(%status, code, err = %self.0, "request failed");
        } else {
            tracing::debug!(%status, code, err = %self.0, "request rejected");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
