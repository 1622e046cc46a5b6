//! Domain models shared by the API client and the views.

mod email;
mod request;

pub use email::{Email, EmailId, EmailStatus, EmailType};
pub use request::EmailRequest;
