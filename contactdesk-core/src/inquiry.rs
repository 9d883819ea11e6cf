//! Inquiry records: raw submissions, validated submissions, stored records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A stored contact-form submission.
///
/// Serialized with camelCase keys: `{id, name, email, message, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A submission that passed validation and is ready to be stored.
///
/// Only [`crate::validate`] constructs this, so holding one proves the
/// field rules were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
}

impl NewInquiry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed and lower-cased.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Turn into a stored record. `created_at` doubles as `updated_at`
    /// since records are never modified.
    pub fn into_inquiry(self, id: Uuid, created_at: DateTime<Utc>) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
            updated_at: created_at,
        }
    }
}

/// One field of an untrusted submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RawField {
    /// Absent key or JSON `null`
    #[default]
    Missing,
    Text(String),
    /// A JSON array or object where text was expected
    Unsupported,
}

impl RawField {
    /// Coerce an untyped JSON value. Numbers and booleans take their
    /// textual form.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(Value::Number(n)) => Self::Text(n.to_string()),
            Some(Value::Bool(b)) => Self::Text(b.to_string()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Self::Unsupported,
        }
    }

    /// The submitted text, or an empty string if there was none.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Missing | Self::Unsupported => "",
        }
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// An unvalidated submission, as received from the wire or the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInquiry {
    pub name: RawField,
    pub email: RawField,
    pub message: RawField,
}

impl RawInquiry {
    pub fn new(
        name: impl Into<RawField>,
        email: impl Into<RawField>,
        message: impl Into<RawField>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Read `name`, `email` and `message` out of an untyped JSON body.
    ///
    /// Returns `None` when the body is not a JSON object. Unknown keys are
    /// ignored.
    pub fn from_json(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        Some(Self {
            name: RawField::from_json(object.get("name")),
            email: RawField::from_json(object.get("email")),
            message: RawField::from_json(object.get("message")),
        })
    }
}
