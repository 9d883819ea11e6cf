//! Field rules for an inquiry
//!
//! Each field is trimmed before it is checked. Every violated field is
//! reported, at most one message per field, in the order name, email,
//! message.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::inquiry::{NewInquiry, RawField, RawInquiry};

/// Minimum message length, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Unanchored email shape. Deliberately loose: something, `@`, something,
/// `.`, something, with no whitespace. Also used verbatim as the HTML
/// `pattern` attribute, which is anchored implicitly.
pub const EMAIL_SHAPE: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{EMAIL_SHAPE}$")).expect("invalid email regex"));

/// The fields of an inquiry submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "お名前",
            Self::Email => "メールアドレス",
            Self::Message => "メッセージ",
        }
    }
}

/// What was wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Missing, or empty after trimming
    Required,
    /// Didn't match the expected shape, or wasn't text at all
    InvalidFormat,
    /// Shorter than `min` characters
    TooShort { min: usize },
}

/// A single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.field.label();
        match (self.field, self.violation) {
            (_, Violation::Required) => write!(f, "{label}は必須です"),
            (Field::Email, Violation::InvalidFormat) => {
                write!(f, "有効なメールアドレスを入力してください")
            }
            (_, Violation::InvalidFormat) => write!(f, "{label}の形式が正しくありません"),
            (_, Violation::TooShort { min }) => {
                write!(f, "{label}は{min}文字以上で入力してください")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Every field-level failure found in one submission. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The failure for `field`, if it had one.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Human-readable messages, one per violated field.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// Validate a raw submission into a storable one.
///
/// Pure: the same input always yields the same result.
pub fn validate(raw: &RawInquiry) -> Result<NewInquiry, FieldErrors> {
    let mut errors = Vec::new();

    let name = check_name(&raw.name).map_err(|v| errors.push(v));
    let email = check_email(&raw.email).map_err(|v| errors.push(v));
    let message = check_message(&raw.message).map_err(|v| errors.push(v));

    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(NewInquiry {
            name,
            email,
            message,
        }),
        _ => Err(FieldErrors(errors)),
    }
}

fn check_name(raw: &RawField) -> Result<String, FieldError> {
    required(Field::Name, raw)
}

fn check_email(raw: &RawField) -> Result<String, FieldError> {
    let email = required(Field::Email, raw)?.to_lowercase();
    if !EMAIL_RE.is_match(&email) {
        return Err(FieldError {
            field: Field::Email,
            violation: Violation::InvalidFormat,
        });
    }
    Ok(email)
}

fn check_message(raw: &RawField) -> Result<String, FieldError> {
    let message = required(Field::Message, raw)?;
    if message.chars().count() < MESSAGE_MIN_CHARS {
        return Err(FieldError {
            field: Field::Message,
            violation: Violation::TooShort {
                min: MESSAGE_MIN_CHARS,
            },
        });
    }
    Ok(message)
}

/// Trimmed text of a present, non-empty field.
fn required(field: Field, raw: &RawField) -> Result<String, FieldError> {
    let fail = |violation| FieldError { field, violation };
    match raw {
        RawField::Missing => Err(fail(Violation::Required)),
        RawField::Unsupported => Err(fail(Violation::InvalidFormat)),
        RawField::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(fail(Violation::Required))
            } else {
                Ok(trimmed.to_owned())
            }
        }
    }
}
