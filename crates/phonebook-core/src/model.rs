//! Contact records and the create-request schema.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PhonebookError, Result};

/// Service-assigned contact identifier. Starts at 1, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored contact. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

/// Validated input for `ContactStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
}

/// Wire shape of `POST /contacts`.
///
/// Fields are optional at the serde level so an absent (or `null`) field
/// becomes `MissingField` instead of a generic decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl CreateContactRequest {
    pub fn into_new_contact(self) -> Result<NewContact> {
        let name = self.name.ok_or(PhonebookError::MissingField("name"))?;
        let phone = self.phone.ok_or(PhonebookError::MissingField("phone"))?;
        Ok(NewContact { name, phone })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn parse(s: &str) -> CreateContactRequest {
        serde_json::from_str(s).expect("valid json")
    }

    #[test]
    fn full_request_converts() {
        let new = parse(r#"{"name":"A","phone":"1"}"#).into_new_contact().unwrap();
        assert_eq!(new.name, "A");
        assert_eq!(new.phone, "1");
    }

    #[test]
    fn absent_name_is_reported_first() {
        let err = parse("{}").into_new_contact().unwrap_err();
        assert!(matches!(err, PhonebookError::MissingField("name")));
    }

    #[test]
    fn null_phone_counts_as_missing() {
        let err = parse(r#"{"name":"A","phone":null}"#).into_new_contact().unwrap_err();
        assert!(matches!(err, PhonebookError::MissingField("phone")));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let new = parse(r#"{"name":"A","phone":"1","email":"a@b"}"#)
            .into_new_contact()
            .unwrap();
        assert_eq!(new.name, "A");
    }

    #[test]
    fn contact_serializes_flat() {
        let c = Contact { id: ContactId(3), name: "Иван Иванов".into(), phone: "+79990001122".into() };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, serde_json::json!({"id": 3, "name": "Иван Иванов", "phone": "+79990001122"}));
    }
}
