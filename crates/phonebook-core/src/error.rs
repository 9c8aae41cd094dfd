//! Shared error type across phonebook crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Referenced contact does not exist.
    NotFound,
    /// A required request field is absent.
    MissingField,
    /// Route exists but not for this HTTP method.
    MethodNotAllowed,
    /// Invalid input / malformed body.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::MissingField => "MISSING_FIELD",
            ClientCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PhonebookError>;

/// Unified error type used by core and server.
///
/// Display strings are the messages returned to HTTP callers. `NotFound`
/// carries the requested id literal, which may exceed the id range.
#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error("Контакт не найден")]
    NotFound(String),
    #[error("Отсутствует обязательное поле: {0}")]
    MissingField(&'static str),
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),
    #[error("Ресурс не найден")]
    NoRoute,
    #[error("Метод не разрешён")]
    MethodNotAllowed,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PhonebookError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PhonebookError::NotFound(_) | PhonebookError::NoRoute => ClientCode::NotFound,
            PhonebookError::MissingField(_) => ClientCode::MissingField,
            PhonebookError::MethodNotAllowed => ClientCode::MethodNotAllowed,
            PhonebookError::BadRequest(_) => ClientCode::BadRequest,
            PhonebookError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PhonebookError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_localized() {
        let err = PhonebookError::NotFound("7".into());
        assert_eq!(err.to_string(), "Контакт не найден");
        assert_eq!(err.client_code().as_str(), "NOT_FOUND");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = PhonebookError::MissingField("phone");
        assert_eq!(err.to_string(), "Отсутствует обязательное поле: phone");
        assert_eq!(err.client_code(), ClientCode::MissingField);
    }

    #[test]
    fn no_route_shares_not_found_code() {
        assert_eq!(PhonebookError::NoRoute.client_code(), ClientCode::NotFound);
    }
}
