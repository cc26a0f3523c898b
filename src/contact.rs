//! Contact records and the request payload that creates or replaces one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Store-assigned identifier of a contact.
pub type ContactId = i64;

/// A stored contact.
///
/// Serialises as
/// `{"id":1,"firstName":"..","lastName":"..","middleName":"..","phone":"..","email":"..","address":".."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Combines an id with the fields of a payload.
    pub fn from_new(id: ContactId, fields: NewContact) -> Self {
        let NewContact { first_name, last_name, middle_name, phone, email, address } = fields;
        Self { id, first_name, last_name, middle_name, phone, email, address }
    }
}

/// Body of create and edit requests: every contact field except `id`.
///
/// Decoding rules, in order of precedence:
/// - an unknown field name fails the whole body;
/// - names match regardless of ASCII case (`FirstName` fills `firstName`);
/// - a repeated name keeps its last value;
/// - a missing field or a `null` value decodes as `""`;
/// - a `null` body decodes as an empty contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Why a request body could not become a [`NewContact`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request body is empty")]
    Empty,
    #[error("invalid contact payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("contact payload must be a JSON object")]
    NotAnObject,
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("field `{0}` must be a string")]
    NotAString(String),
}

impl NewContact {
    /// Decodes the first JSON value in `body`.
    ///
    /// Bytes after that value are not inspected, so `{..} trailing` is
    /// accepted while malformed JSON, wrong types, and unknown fields are not.
    pub fn from_json(body: &[u8]) -> Result<Self, DecodeError> {
        let value = serde_json::Deserializer::from_slice(body)
            .into_iter::<Value>()
            .next()
            .ok_or(DecodeError::Empty)??;

        // Parsing into a map keeps the last value of a repeated key.
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            _ => return Err(DecodeError::NotAnObject),
        };

        let mut contact = Self::default();
        for (key, value) in object {
            let Some(slot) = contact.field_mut(&key) else {
                return Err(DecodeError::UnknownField(key));
            };
            match value {
                Value::String(text) => *slot = text,
                Value::Null => {}
                _ => return Err(DecodeError::NotAString(key)),
            }
        }
        Ok(contact)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name.to_ascii_lowercase().as_str() {
            "firstname" => &mut self.first_name,
            "lastname" => &mut self.last_name,
            "middlename" => &mut self.middle_name,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "address" => &mut self.address,
            _ => return None,
        };
        Some(slot)
    }
}
