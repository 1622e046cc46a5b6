//! # prune-core
//!
//! Core logic for the `Prune` email client.
//!
//! This crate provides:
//! - Domain models (`Email`, `EmailRequest`) matching the mail API wire format
//! - Client-side validation of compose requests
//! - Client configuration
//! - The `EmailApi` seam and its HTTP implementation (`EmailClient`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod model;
pub mod service;
pub mod validation;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{Email, EmailId, EmailRequest, EmailStatus, EmailType};
pub use service::{EmailApi, EmailClient, EmailClientBuilder};
pub use validation::{
    ValidationError, ValidationResult, field_messages, is_valid_email, validate_draft,
    validate_send,
};
