//! Route dispatch and the CLI commands driven through the app.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use prune::Route;
use prune::cli::{self, Command, ComposeArgs};
use prune::model::AppSettings;
use prune_core::{EmailId, EmailType};

use support::{Call, FakeApi, GetFailure, Harness, mailbox};

#[tokio::test]
async fn test_unknown_path_lands_on_list() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    assert_eq!(app.open("/settings/advanced").await, &Route::List);
    assert_eq!(app.list().emails(EmailType::Sent).len(), 1);
}

#[tokio::test]
async fn test_detail_route_loads_email() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    assert_eq!(app.open("/email/3").await, &Route::Detail("3".to_string()));
    assert_eq!(app.detail().email().unwrap().id, Some(EmailId(3)));
}

#[tokio::test]
async fn test_bad_detail_id_redirects_to_list() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    assert_eq!(app.open("/email/abc").await, &Route::List);
    assert_eq!(app.route(), &Route::List);
    assert!(!h.api.calls().iter().any(|c| matches!(c, Call::Get(_))));
    assert_eq!(app.list().emails(EmailType::Draft).len(), 1);
}

#[tokio::test]
async fn test_missing_email_redirects_and_loads_list() {
    let api = FakeApi::new(mailbox());
    api.fail_get(GetFailure::NotFound);
    let h = Harness::new(api);
    let mut app = h.app();

    assert_eq!(app.navigate(Route::detail(EmailId(42))).await, &Route::List);
    assert_eq!(h.messages(), vec!["Email not found"]);
    assert_eq!(app.list().emails(EmailType::Received).len(), 1);
}

#[tokio::test]
async fn test_compose_route_resets_form() {
    let h = Harness::new(FakeApi::default());
    let mut app = h.app();
    app.compose_mut().form_mut().subject = "stale".to_string();

    assert_eq!(app.open("/compose").await, &Route::Compose);
    assert!(app.compose().form().is_empty());
}

#[tokio::test]
async fn test_list_command_renders_buckets() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    let output = cli::run(Command::List, &mut app, &AppSettings::default())
        .await
        .unwrap();

    assert!(output.contains("Sent (1)"));
    assert!(output.contains("Received (1)"));
    assert!(output.contains("Drafts (1)"));
    assert!(output.contains("15 January 2025 10:30:05"));
    assert!(output.contains("N/A"));
}

#[tokio::test]
async fn test_show_command_fails_for_missing_email() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    let settings = AppSettings::default();
    let result = cli::run(Command::Show { id: "99".to_string() }, &mut app, &settings).await;

    assert!(result.is_err());
    assert_eq!(app.route(), &Route::List);
}

#[tokio::test]
async fn test_show_command_renders_email() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    let settings = AppSettings::default();
    let output = cli::run(Command::Show { id: "1".to_string() }, &mut app, &settings)
        .await
        .unwrap();

    assert!(output.starts_with("Subject 1\n"));
    assert!(output.contains("Sent:     15 January 2025 10:30:05"));
    assert!(output.contains("Received: N/A"));
    assert!(output.ends_with("Body 1\n"));
}

#[tokio::test]
async fn test_send_command_rejects_invalid_form() {
    let h = Harness::new(FakeApi::default());
    let mut app = h.app();
    let args = ComposeArgs {
        to: "john@example.com".to_string(),
        ..ComposeArgs::default()
    };

    let err = cli::run(Command::Send(args), &mut app, &AppSettings::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("subject: Subject is required"));
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn test_delete_command_reloads_list() {
    let h = Harness::new(FakeApi::new(mailbox()));
    let mut app = h.app();

    let output = cli::run(
        Command::Delete {
            id: EmailId(1),
            yes: true,
        },
        &mut app,
        &AppSettings::default(),
    )
    .await
    .unwrap();

    assert!(output.contains("Sent (0)"));
    assert!(!app.list().contains(EmailId(1)));
}
