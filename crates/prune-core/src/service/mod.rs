//! Data access for the mail API.
//!
//! Views talk to the API through the [`EmailApi`] trait; [`EmailClient`] is
//! the HTTP implementation.

mod api;
mod client;

pub use api::EmailApi;
pub use client::{EmailClient, EmailClientBuilder};
