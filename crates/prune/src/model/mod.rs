//! State models for the client.

mod compose;
mod settings;

pub use compose::ComposeState;
pub use settings::{AppSettings, SettingsError};
