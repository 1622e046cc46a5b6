//! Compose view: send or save a draft.
//!
//! Submitting is split in two steps so the busy flag is observable while a
//! request is in flight: `begin_*` validates the form and marks the view
//! busy, `finish_*` applies the server's answer. A second `begin_*` while
//! busy is refused.

use std::collections::BTreeMap;
use std::sync::Arc;

use prune_core::{Email, EmailApi, EmailRequest, ValidationError, field_messages};
use tracing::{error, info};

use crate::model::ComposeState;
use crate::notify::{NotificationKind, Notifier};

/// Outcome of the first submission step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Form is valid; dispatch this request and hand the result to `finish_*`.
    Ready(EmailRequest),
    /// Form failed validation; nothing to dispatch.
    Invalid(Vec<ValidationError>),
    /// Another request is still in flight.
    Busy,
}

/// Final outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeOutcome {
    /// The email was sent; the form was cleared.
    Sent(Email),
    /// The draft was saved; the form was kept.
    Saved(Email),
    /// Validation failed; no request was made.
    Invalid(Vec<ValidationError>),
    /// Refused because a request is in flight.
    Busy,
    /// The request failed; the form was kept.
    Failed,
}

/// State of the compose screen.
pub struct ComposeView {
    api: Arc<dyn EmailApi>,
    notifier: Arc<dyn Notifier>,
    form: ComposeState,
    errors: Vec<ValidationError>,
    busy: bool,
}

impl ComposeView {
    /// Creates a view with an empty form.
    #[must_use]
    pub fn new(api: Arc<dyn EmailApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            form: ComposeState::new(),
            errors: Vec::new(),
            busy: false,
        }
    }

    /// Starts the screen with a fresh form.
    pub fn on_activate(&mut self) {
        self.reset();
    }

    /// The form.
    #[must_use]
    pub const fn form(&self) -> &ComposeState {
        &self.form
    }

    /// Mutable access to the form fields.
    pub fn form_mut(&mut self) -> &mut ComposeState {
        &mut self.form
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Errors of the last rejected submission.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Errors of the last rejected submission as field → message.
    #[must_use]
    pub fn field_errors(&self) -> BTreeMap<&'static str, &'static str> {
        field_messages(&self.errors)
    }

    /// Clears the form.
    pub fn reset(&mut self) {
        self.form.reset();
        self.errors.clear();
    }

    /// Validates the whole form and marks the view busy.
    pub fn begin_send(&mut self) -> Submission {
        let validation = self.form.validate_send();
        self.begin(validation)
    }

    /// Checks that a recipient or subject is present and marks the view busy.
    pub fn begin_draft(&mut self) -> Submission {
        let validation = self.form.validate_draft();
        self.begin(validation)
    }

    fn begin(&mut self, validation: prune_core::ValidationResult) -> Submission {
        if self.busy {
            return Submission::Busy;
        }

        if let Err(errors) = validation {
            self.errors.clone_from(&errors);
            return Submission::Invalid(errors);
        }

        self.errors.clear();
        self.busy = true;
        Submission::Ready(self.form.to_request())
    }

    /// Applies the result of a send.
    ///
    /// Success clears the form; failure keeps it for another attempt.
    pub fn finish_send(&mut self, result: prune_core::Result<Email>) -> ComposeOutcome {
        self.busy = false;
        match result {
            Ok(email) => {
                info!("Email sent to {}", email.to_email);
                self.notifier
                    .notify("Email sent successfully", NotificationKind::Success);
                self.reset();
                ComposeOutcome::Sent(email)
            }
            Err(e) => {
                error!("Failed to send email: {}", e);
                self.notifier
                    .notify("Failed to send email", NotificationKind::Error);
                ComposeOutcome::Failed
            }
        }
    }

    /// Applies the result of a draft save. The form is kept either way.
    pub fn finish_draft(&mut self, result: prune_core::Result<Email>) -> ComposeOutcome {
        self.busy = false;
        match result {
            Ok(email) => {
                info!("Draft saved as {:?}", email.id);
                self.notifier.notify("Draft saved", NotificationKind::Success);
                ComposeOutcome::Saved(email)
            }
            Err(e) => {
                error!("Failed to save draft: {}", e);
                self.notifier
                    .notify("Failed to save draft", NotificationKind::Error);
                ComposeOutcome::Failed
            }
        }
    }

    /// Validates and sends the form.
    pub async fn send(&mut self) -> ComposeOutcome {
        match self.begin_send() {
            Submission::Ready(request) => {
                let result = self.api.send(&request).await;
                self.finish_send(result)
            }
            Submission::Invalid(errors) => ComposeOutcome::Invalid(errors),
            Submission::Busy => ComposeOutcome::Busy,
        }
    }

    /// Validates and saves the form as a draft.
    pub async fn save_as_draft(&mut self) -> ComposeOutcome {
        match self.begin_draft() {
            Submission::Ready(request) => {
                let result = self.api.save_as_draft(&request).await;
                self.finish_draft(result)
            }
            Submission::Invalid(errors) => ComposeOutcome::Invalid(errors),
            Submission::Busy => ComposeOutcome::Busy,
        }
    }
}

impl std::fmt::Debug for ComposeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposeView")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("busy", &self.busy)
            .finish_non_exhaustive()
    }
}
