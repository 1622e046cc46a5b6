//! Transient user notifications.

use std::sync::Mutex;
use std::time::Duration;

use tracing::{error, info, warn};

/// How long a desktop notification stays on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

/// Kind of notification, used for styling and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An action completed.
    Success,
    /// An action failed.
    Error,
    /// Neutral information.
    Info,
}

impl NotificationKind {
    /// Short title for the notification.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Done",
            Self::Error => "Error",
            Self::Info => "Info",
        }
    }
}

/// Shows short-lived messages to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message`.
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Prints notifications to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => error!(target: "prune::notify", "{message}"),
            NotificationKind::Success | NotificationKind::Info => {
                info!(target: "prune::notify", "{message}");
            }
        }
        eprintln!("[{}] {message}", kind.title());
    }
}

/// Shows desktop notifications, falling back to the console when the
/// notification daemon is unavailable.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
    timeout: Duration,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self {
            app_name: "Prune".to_string(),
            timeout: NOTIFICATION_TIMEOUT,
        }
    }
}

impl DesktopNotifier {
    /// Creates a notifier with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let timeout = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let shown = notify_rust::Notification::new()
            .appname(&self.app_name)
            .summary(&format!("{} - {}", self.app_name, kind.title()))
            .body(message)
            .timeout(notify_rust::Timeout::Milliseconds(timeout))
            .show();

        if let Err(e) = shown {
            warn!("Desktop notification failed: {}", e);
            ConsoleNotifier.notify(message, kind);
        }
    }
}

/// A notification captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text.
    pub message: String,
    /// Notification kind.
    pub kind: NotificationKind,
}

/// Keeps every notification in memory instead of showing it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Notification> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Kinds of all notifications so far.
    #[must_use]
    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.calls().into_iter().map(|n| n.kind).collect()
    }

    /// Forgets recorded notifications.
    pub fn clear(&self) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.clear();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(Notification {
                message: message.to_string(),
                kind,
            });
        }
    }
}
