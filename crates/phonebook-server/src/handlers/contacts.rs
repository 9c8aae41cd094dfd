//! `/contacts` resource: create, read, delete.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use phonebook_core::{Contact, ContactId, CreateContactRequest, PhonebookError};

use crate::app_state::AppState;
use crate::http_error::ApiError;

pub const DELETED_MESSAGE: &str = "Контакт удалён";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Resolve the `{id}` segment.
///
/// Only a bare run of ASCII digits is an id; anything else (signs included)
/// is treated as unrouted, like an unknown path. Digits beyond the id range
/// can never have been assigned, so they are a plain miss.
fn contact_id(path: Result<Path<String>, PathRejection>) -> Result<ContactId, ApiError> {
    let raw = match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(%rejection, "contact id segment rejected");
            return Err(PhonebookError::NoRoute.into());
        }
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(segment = %raw, "contact id segment is not an integer literal");
        return Err(PhonebookError::NoRoute.into());
    }

    raw.parse::<u64>()
        .map(ContactId)
        .map_err(|_| ApiError::from(PhonebookError::NotFound(raw)))
}

/// The create body must be a JSON object; arrays and scalars are rejected
/// before field extraction.
fn create_request(body: Result<Json<Value>, JsonRejection>) -> Result<CreateContactRequest, ApiError> {
    let Json(value) = body.map_err(|rejection| PhonebookError::BadRequest(rejection.body_text()))?;
    if !value.is_object() {
        return Err(PhonebookError::BadRequest("тело запроса должно быть JSON-объектом".into()).into());
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::from(PhonebookError::BadRequest(e.to_string())))
}

pub async fn create_contact(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let new = create_request(body)?.into_new_contact()?;

    let contact = state.store().create(new);
    tracing::info!(id = %contact.id, "contact created");

    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn get_contact(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Contact>, ApiError> {
    let id = contact_id(path)?;
    let contact = state.store().get(id)?;
    Ok(Json(contact))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = contact_id(path)?;
    state.store().delete(id)?;
    tracing::info!(%id, "contact deleted");
    Ok(Json(MessageBody { message: DELETED_MESSAGE }))
}
