//! contactdesk-core: the inquiry record and its validation schema
//!
//! Everything here is pure: no I/O, no database. The HTTP endpoint and the
//! form UI in contactdesk-server both validate through [`validate`], so the
//! two layers cannot drift apart.

pub mod display;
pub mod inquiry;
pub mod validation;

pub use inquiry::{Inquiry, NewInquiry, RawField, RawInquiry};
pub use validation::{validate, Field, FieldError, FieldErrors, Violation};
