//! Detail view: one email.

use std::sync::Arc;

use prune_core::{Email, EmailApi, EmailId};
use tracing::{error, info, warn};

use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::format::DateFormatter;
use crate::notify::{NotificationKind, Notifier};
use crate::route::Route;

/// State of the detail screen.
pub struct DetailView {
    api: Arc<dyn EmailApi>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
    formatter: DateFormatter,
    email: Option<Email>,
}

impl DetailView {
    /// Creates an empty detail view.
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
            email: None,
        }
    }

    /// Loads the email named by the route parameter.
    ///
    /// Returns a redirect to the list when the id is missing or not numeric,
    /// or when the fetch fails. A missing email and a failed request are
    /// reported differently but both redirect.
    pub async fn on_activate(&mut self, id: Option<&str>) -> Option<Route> {
        self.email = None;

        let Some(id) = id.and_then(|raw| raw.parse::<EmailId>().ok()) else {
            warn!("Invalid email id in route: {:?}", id);
            self.notifier
                .notify("Invalid email id", NotificationKind::Error);
            return Some(Route::List);
        };

        let result = self.api.get_by_id(id).await;

        match result {
            Ok(email) => {
                self.email = Some(email);
                None
            }
            Err(e) if e.is_not_found() => {
                warn!("Email {} not found", id);
                self.notifier
                    .notify("Email not found", NotificationKind::Error);
                Some(Route::List)
            }
            Err(e) => {
                error!("Failed to load email {}: {}", id, e);
                self.notifier
                    .notify("Failed to load email", NotificationKind::Error);
                Some(Route::List)
            }
        }
    }

    /// The loaded email.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Formatted sent date, `N/A` when absent or nothing is loaded.
    #[must_use]
    pub fn sent_date(&self) -> String {
        self.formatter
            .format(self.email.as_ref().and_then(|e| e.sent_date.as_ref()))
    }

    /// Formatted received date, `N/A` when absent or nothing is loaded.
    #[must_use]
    pub fn received_date(&self) -> String {
        self.formatter
            .format(self.email.as_ref().and_then(|e| e.received_date.as_ref()))
    }

    /// Navigation target of the back action.
    #[must_use]
    pub const fn go_back(&self) -> Route {
        Route::List
    }

    /// Deletes the loaded email after confirmation.
    ///
    /// Returns the list route on success; stays on the screen otherwise.
    pub async fn delete(&mut self) -> Option<Route> {
        let id = self.email.as_ref().and_then(|e| e.id)?;
        if !self.confirm.confirm(DELETE_PROMPT) {
            return None;
        }

        let result = self.api.delete(id).await;
        match result {
            Ok(()) => {
                info!("Deleted email {}", id);
                self.email = None;
                self.notifier
                    .notify("Email deleted", NotificationKind::Success);
                Some(Route::List)
            }
            Err(e) => {
                error!("Failed to delete email {}: {}", id, e);
                self.notifier
                    .notify("Failed to delete email", NotificationKind::Error);
                None
            }
        }
    }
}

impl std::fmt::Debug for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailView")
            .field("email", &self.email.as_ref().and_then(|e| e.id))
            .finish_non_exhaustive()
    }
}
