//! json-envelope: standardized JSON responses for axum handler code.
//!
//! An [`Envelope`] is created per request once JSON handling is confirmed
//! (or forced), seeded with boilerplate fields, mutated by action code, and
//! handed back as the response. [`FieldErrors`] carries nested per-field
//! validation errors and flattens them into one human-readable message.

pub mod config;
pub mod envelope;
pub mod error;
pub mod field_errors;
pub mod identity;
pub mod inflect;
pub mod submit;

pub use config::EnvelopeConfig;
pub use envelope::{Envelope, TemplateRenderer};
pub use error::EnvelopeError;
pub use field_errors::{FieldError, FieldErrors, HasFieldErrors};
pub use identity::{
    classification, long_identifier, route, url, Identifiable, RouteDescriptor, UrlResolver,
    UrlTarget,
};
pub use submit::SubmitRequest;
