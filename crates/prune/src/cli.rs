//! Command-line surface.

use std::path::Path;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use prune_core::EmailId;

use crate::app::App;
use crate::model::{AppSettings, ComposeState};
use crate::notify::{NotificationKind, Notifier};
use crate::render;
use crate::route::Route;
use crate::view::{ComposeOutcome, DeleteOutcome};

/// Terminal client for the mail API.
#[derive(Debug, Parser)]
#[command(name = "prune")]
#[command(about = "Send, read and manage emails through the mail API", long_about = None)]
pub struct Cli {
    /// Base URL of the mail API, e.g. `http://localhost:8080/api/emails`
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Locale used for dates, e.g. `fr_FR` or `en_US`
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Show desktop notifications instead of console messages
    #[arg(long, global = true)]
    pub desktop_notifications: bool,

    /// Command to run; lists emails when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show sent, received and draft emails
    List,

    /// Show one email
    Show {
        /// Email id
        id: String,
    },

    /// Delete an email
    Delete {
        /// Email id
        id: EmailId,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Send an email
    Send(ComposeArgs),

    /// Save an email as a draft
    Draft(ComposeArgs),

    /// Open a screen by path: `/emails`, `/compose` or `/email/{id}`
    Open {
        /// Route path
        route: String,
    },

    /// Write the current settings to the settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Compose form fields.
#[derive(Debug, Clone, Default, Args)]
pub struct ComposeArgs {
    /// Recipient address
    #[arg(long, default_value = "")]
    pub to: String,

    /// CC address
    #[arg(long, default_value = "")]
    pub cc: String,

    /// BCC address
    #[arg(long, default_value = "")]
    pub bcc: String,

    /// Subject line
    #[arg(long, short, default_value = "")]
    pub subject: String,

    /// Message body
    #[arg(long, short, default_value = "")]
    pub body: String,

    /// Treat the body as HTML
    #[arg(long)]
    pub html: bool,
}

impl ComposeArgs {
    /// Copies the arguments into a compose form.
    pub fn fill(&self, form: &mut ComposeState) {
        form.to.clone_from(&self.to);
        form.cc.clone_from(&self.cc);
        form.bcc.clone_from(&self.bcc);
        form.subject.clone_from(&self.subject);
        form.body.clone_from(&self.body);
        form.is_html = self.html;
    }
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings.
    pub fn apply_overrides(&self, settings: &mut AppSettings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url.clone_from(url);
        }
        if let Some(locale) = &self.locale {
            settings.locale.clone_from(locale);
        }
        if self.desktop_notifications {
            settings.desktop_notifications = true;
        }
    }

    /// Whether the command was told to skip confirmation.
    #[must_use]
    pub const fn skip_confirmation(&self) -> bool {
        matches!(self.command, Some(Command::Delete { yes: true, .. }))
    }
}

/// Runs a command against the app and returns the text to print.
///
/// # Errors
///
/// Returns an error when the action was rejected or failed. The user has
/// already been notified at that point; the error only sets the exit status.
pub async fn run(command: Command, app: &mut App, settings: &AppSettings) -> Result<String> {
    match command {
        Command::Init { force } => {
            init_settings(
                settings,
                &AppSettings::default_path(),
                force,
                app.notifier().as_ref(),
            )
            .await
        }
        Command::List => {
            app.navigate(Route::List).await;
            Ok(render::list(app.list()))
        }
        Command::Show { id } => show(app, Route::Detail(id)).await,
        Command::Open { route } => show(app, Route::parse(&route)).await,
        Command::Delete { id, .. } => {
            app.navigate(Route::List).await;
            match app.list_mut().delete(id).await {
                DeleteOutcome::Deleted => Ok(render::list(app.list())),
                DeleteOutcome::Cancelled => Ok("Cancelled\n".to_string()),
                DeleteOutcome::Failed => bail!("could not delete email {id}"),
            }
        }
        Command::Send(args) => {
            app.navigate(Route::Compose).await;
            args.fill(app.compose_mut().form_mut());
            let outcome = app.compose_mut().send().await;
            finish(app, outcome)
        }
        Command::Draft(args) => {
            app.navigate(Route::Compose).await;
            args.fill(app.compose_mut().form_mut());
            let outcome = app.compose_mut().save_as_draft().await;
            finish(app, outcome)
        }
    }
}

/// Writes `settings` to `path` and notifies where they went.
///
/// # Errors
///
/// Returns an error if the file already exists and `force` is not set, or
/// if it cannot be written.
pub async fn init_settings(
    settings: &AppSettings,
    path: &Path,
    force: bool,
    notifier: &dyn Notifier,
) -> Result<String> {
    if !force && tokio::fs::try_exists(path).await? {
        bail!("{} already exists; use --force to overwrite", path.display());
    }

    settings.save_to(path).await?;
    let message = format!("Settings written to {}", path.display());
    notifier.notify(&message, NotificationKind::Info);
    Ok(format!("{message}\n"))
}

async fn show(app: &mut App, route: Route) -> Result<String> {
    let requested_detail = matches!(route, Route::Detail(_));
    let current = app.navigate(route).await.clone();

    match current {
        Route::List if requested_detail => bail!("could not open email"),
        Route::List => Ok(render::list(app.list())),
        Route::Detail(_) => Ok(render::detail(app.detail())),
        Route::Compose => Ok(render::compose(app.compose().form())),
    }
}

fn finish(app: &App, outcome: ComposeOutcome) -> Result<String> {
    match outcome {
        ComposeOutcome::Sent(email) | ComposeOutcome::Saved(email) => {
            Ok(format!("{}\n", render::summary(&email)))
        }
        ComposeOutcome::Invalid(_) => {
            bail!("{}", render::field_errors(&app.compose().field_errors()).trim_end())
        }
        ComposeOutcome::Busy => bail!("a request is already in flight"),
        ComposeOutcome::Failed => bail!("the mail API rejected the request"),
    }
}
