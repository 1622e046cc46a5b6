//! List view: sent, received and draft buckets.

use std::sync::Arc;

use prune_core::{Email, EmailApi, EmailId, EmailStatus, EmailType};
use tracing::{debug, error, info};

use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::format::DateFormatter;
use crate::notify::{NotificationKind, Notifier};
use crate::route::Route;

/// One independently loaded list.
#[derive(Debug, Clone, Default)]
struct Bucket {
    emails: Vec<Email>,
    error: Option<String>,
}

/// A display row of the list table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRow {
    /// Email identifier.
    pub id: Option<EmailId>,
    /// Sender.
    pub from: String,
    /// Recipient.
    pub to: String,
    /// Subject.
    pub subject: String,
    /// Formatted date, `N/A` when absent.
    pub date: String,
    /// Status.
    pub status: EmailStatus,
}

/// Result of a delete action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The email was deleted and the lists reloaded.
    Deleted,
    /// The request failed; lists are unchanged.
    Failed,
}

/// State of the list screen.
pub struct ListView {
    api: Arc<dyn EmailApi>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    formatter: DateFormatter,
    sent: Bucket,
    received: Bucket,
    drafts: Bucket,
}

impl ListView {
    /// Creates an empty list view.
    #[must_use]
    pub fn new(
        api: Arc<dyn EmailApi>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
        formatter: DateFormatter,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            formatter,
            sent: Bucket::default(),
            received: Bucket::default(),
            drafts: Bucket::default(),
        }
    }

    /// Loads the three buckets.
    ///
    /// The queries run concurrently and each result lands in its own bucket;
    /// a failed query leaves its bucket as it was and does not affect the
    /// other two.
    pub async fn on_activate(&mut self) {
        let api = Arc::clone(&self.api);
        let (sent, received, drafts) =
            tokio::join!(api.list_sent(), api.list_received(), api.list_drafts());

        self.apply(EmailType::Sent, sent);
        self.apply(EmailType::Received, received);
        self.apply(EmailType::Draft, drafts);
    }

    fn apply(&mut self, email_type: EmailType, result: prune_core::Result<Vec<Email>>) {
        match result {
            Ok(emails) => {
                debug!("Loaded {} {} emails", emails.len(), email_type.label());
                let bucket = self.bucket_mut(email_type);
                bucket.emails = emails;
                bucket.error = None;
            }
            Err(e) => {
                error!("Failed to load {} emails: {}", email_type.label(), e);
                self.bucket_mut(email_type).error = Some(e.to_string());
                self.notifier.notify(
                    &format!("Failed to load {}", email_type.label().to_lowercase()),
                    NotificationKind::Error,
                );
            }
        }
    }

    const fn bucket(&self, email_type: EmailType) -> &Bucket {
        match email_type {
            EmailType::Sent => &self.sent,
            EmailType::Received => &self.received,
            EmailType::Draft => &self.drafts,
        }
    }

    fn bucket_mut(&mut self, email_type: EmailType) -> &mut Bucket {
        match email_type {
            EmailType::Sent => &mut self.sent,
            EmailType::Received => &mut self.received,
            EmailType::Draft => &mut self.drafts,
        }
    }

    /// Emails currently shown in a bucket.
    #[must_use]
    pub fn emails(&self, email_type: EmailType) -> &[Email] {
        &self.bucket(email_type).emails
    }

    /// Error of the last load of a bucket, if it failed.
    #[must_use]
    pub fn bucket_error(&self, email_type: EmailType) -> Option<&str> {
        self.bucket(email_type).error.as_deref()
    }

    /// Whether any bucket contains `id`.
    #[must_use]
    pub fn contains(&self, id: EmailId) -> bool {
        EmailType::ALL
            .iter()
            .any(|t| self.emails(*t).iter().any(|e| e.id == Some(id)))
    }

    /// Display rows of a bucket.
    #[must_use]
    pub fn rows(&self, email_type: EmailType) -> Vec<EmailRow> {
        self.emails(email_type)
            .iter()
            .map(|email| EmailRow {
                id: email.id,
                from: email.from_email.clone(),
                to: email.to_email.clone(),
                subject: email.subject.clone(),
                date: self.format_date(email),
                status: email.status,
            })
            .collect()
    }

    /// Formats the list date of `email`.
    #[must_use]
    pub fn format_date(&self, email: &Email) -> String {
        self.formatter.format(email.display_date())
    }

    /// Navigation target for opening an email.
    #[must_use]
    pub fn view_email(&self, id: EmailId) -> Route {
        Route::detail(id)
    }

    /// Deletes an email after confirmation, then reloads every bucket.
    pub async fn delete(&mut self, id: EmailId) -> DeleteOutcome {
        if !self.confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        let result = self.api.delete(id).await;
        match result {
            Ok(()) => {
                info!("Deleted email {}", id);
                self.notifier
                    .notify("Email deleted", NotificationKind::Success);
                self.on_activate().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Failed to delete email {}: {}", id, e);
                self.notifier
                    .notify("Failed to delete email", NotificationKind::Error);
                DeleteOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for ListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListView")
            .field("sent", &self.sent.emails.len())
            .field("received", &self.received.emails.len())
            .field("drafts", &self.drafts.emails.len())
            .finish_non_exhaustive()
    }
}
