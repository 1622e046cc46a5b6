//! `Prune` - terminal client for the Prune mail API.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use prune::App;
use prune::cli::{self, Cli, Command};
use prune::confirm::{AutoConfirm, Confirm, PromptConfirm};
use prune::model::AppSettings;
use prune::notify::{ConsoleNotifier, DesktopNotifier, Notifier};
use prune_core::EmailClient;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr; stdout carries the rendered screens
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prune=info,prune_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let mut settings = match AppSettings::load().await {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Could not load settings ({}), using defaults", e);
            AppSettings::default()
        }
    };
    settings.api = settings.api.with_env_override();
    args.apply_overrides(&mut settings);

    info!("Starting Prune against {}", settings.api.base_url);

    let client = EmailClient::new(&settings.api)?;
    let notifier: Arc<dyn Notifier> = if settings.desktop_notifications {
        Arc::new(DesktopNotifier::new())
    } else {
        Arc::new(ConsoleNotifier)
    };
    let confirm: Arc<dyn Confirm> = if args.skip_confirmation() {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(PromptConfirm)
    };

    let mut app = App::new(
        Arc::new(client),
        notifier,
        confirm,
        settings.date_formatter(),
    );

    match cli::run(args.command.unwrap_or(Command::List), &mut app, &settings).await {
        Ok(output) => {
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
