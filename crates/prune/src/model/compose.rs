//! Compose form model.

use prune_core::{EmailRequest, ValidationResult, validate_draft, validate_send};

/// State for the compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeState {
    /// Recipient address.
    pub to: String,
    /// CC address.
    pub cc: String,
    /// BCC address.
    pub bcc: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Whether the body is HTML.
    pub is_html: bool,
}

impl ComposeState {
    /// Creates a new empty compose state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is at its default.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    fn as_typed(&self) -> EmailRequest {
        EmailRequest {
            to: self.to.clone(),
            cc: self.cc.clone(),
            bcc: self.bcc.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
            is_html: self.is_html,
        }
    }

    /// Converts to the request sent to the API, with address fields trimmed.
    #[must_use]
    pub fn to_request(&self) -> EmailRequest {
        self.as_typed().trimmed()
    }

    /// Validates the form for sending, as typed.
    ///
    /// # Errors
    ///
    /// Returns the failing fields.
    pub fn validate_send(&self) -> ValidationResult {
        validate_send(&self.as_typed())
    }

    /// Validates the form for saving as a draft, as typed.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDraft` if both recipient and subject are empty.
    pub fn validate_draft(&self) -> ValidationResult {
        validate_draft(&self.as_typed())
    }
}
