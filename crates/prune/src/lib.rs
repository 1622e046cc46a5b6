//! `Prune` - email client front end.
//!
//! View controllers for the list, detail and compose screens, driven by an
//! [`EmailApi`](prune_core::EmailApi) implementation. Each view has an
//! explicit activation entry point and reports to the user through injected
//! [`Notifier`](notify::Notifier) and [`Confirm`](confirm::Confirm)
//! capabilities, so the same views back the terminal front end and the tests.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod confirm;
pub mod format;
pub mod model;
pub mod notify;
pub mod render;
pub mod route;
pub mod view;

pub use app::App;
pub use route::Route;
