//! The data-access seam used by every view.

use async_trait::async_trait;

use crate::Result;
use crate::model::{Email, EmailId, EmailRequest, EmailType};

/// Operations offered by the mail API.
///
/// Every call is a one-shot request: no caching, no retry. Failures are
/// returned to the caller unmodified.
#[async_trait]
pub trait EmailApi: Send + Sync {
    /// Sends an email and returns the stored record.
    async fn send(&self, request: &EmailRequest) -> Result<Email>;

    /// Saves a draft and returns the stored record.
    async fn save_as_draft(&self, request: &EmailRequest) -> Result<Email>;

    /// Lists every email regardless of type.
    async fn list_all(&self) -> Result<Vec<Email>>;

    /// Lists sent emails.
    async fn list_sent(&self) -> Result<Vec<Email>>;

    /// Lists received emails.
    async fn list_received(&self) -> Result<Vec<Email>>;

    /// Lists drafts.
    async fn list_drafts(&self) -> Result<Vec<Email>>;

    /// Fetches a single email.
    ///
    /// Fails with `Error::NotFound` when the server has no such email.
    async fn get_by_id(&self, id: EmailId) -> Result<Email>;

    /// Deletes an email.
    async fn delete(&self, id: EmailId) -> Result<()>;

    /// Lists the emails of one type.
    async fn list(&self, email_type: EmailType) -> Result<Vec<Email>> {
        match email_type {
            EmailType::Sent => self.list_sent().await,
            EmailType::Received => self.list_received().await,
            EmailType::Draft => self.list_drafts().await,
        }
    }
}
