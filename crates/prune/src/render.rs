//! Plain-text rendering of the screens.

use std::collections::BTreeMap;
use std::fmt::Write;

use prune_core::{Email, EmailType};

use crate::model::ComposeState;
use crate::view::{DetailView, EmailRow, ListView};

const LABEL_WIDTH: usize = 10;

/// Renders the three buckets of the list screen.
#[must_use]
pub fn list(view: &ListView) -> String {
    let mut out = String::new();

    for email_type in EmailType::ALL {
        let rows = view.rows(email_type);
        let _ = writeln!(out, "{} ({})", email_type.label(), rows.len());

        if let Some(error) = view.bucket_error(email_type) {
            let _ = writeln!(out, "  ! Failed to load: {error}");
        }

        if rows.is_empty() {
            out.push_str("  (No emails)\n");
        }

        for row in &rows {
            out.push_str(&list_row(row));
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

/// One line of the list table.
#[must_use]
pub fn list_row(row: &EmailRow) -> String {
    let id = row.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let subject = if row.subject.is_empty() {
        "(No subject)"
    } else {
        row.subject.as_str()
    };

    format!(
        "  #{id:<6} {date:<28} {from} -> {to}  {subject}  [{status}]",
        date = row.date,
        from = row.from,
        to = row.to,
        status = row.status,
    )
}

/// Renders the detail screen, or a placeholder when nothing is loaded.
#[must_use]
pub fn detail(view: &DetailView) -> String {
    let Some(email) = view.email() else {
        return "No email loaded\n".to_string();
    };

    let mut out = String::new();
    let subject = if email.subject.is_empty() {
        "(No subject)"
    } else {
        email.subject.as_str()
    };
    let _ = writeln!(out, "{subject}");
    out.push_str(&"=".repeat(subject.chars().count()));
    out.push('\n');

    field_row(&mut out, "From", &email.from_email);
    field_row(&mut out, "To", &email.to_email);
    if let Some(cc) = email.cc() {
        field_row(&mut out, "Cc", cc);
    }
    if let Some(bcc) = email.bcc() {
        field_row(&mut out, "Bcc", bcc);
    }
    field_row(&mut out, "Sent", &view.sent_date());
    field_row(&mut out, "Received", &view.received_date());
    field_row(&mut out, "Status", email.status.as_str());

    out.push('\n');
    if email.body.trim().is_empty() {
        out.push_str("(No content)\n");
    } else {
        out.push_str(&email.body);
        if !email.body.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

fn field_row(out: &mut String, label: &str, value: &str) {
    let label = format!("{label}:");
    let _ = writeln!(out, "{label:<width$}{value}", width = LABEL_WIDTH);
}

/// Renders the compose form.
#[must_use]
pub fn compose(form: &ComposeState) -> String {
    let mut out = String::from("New message\n");
    field_row(&mut out, "To", &form.to);
    field_row(&mut out, "Cc", &form.cc);
    field_row(&mut out, "Bcc", &form.bcc);
    field_row(&mut out, "Subject", &form.subject);
    field_row(&mut out, "Format", if form.is_html { "HTML" } else { "Plain text" });
    out.push('\n');
    out.push_str(&form.body);
    if !form.body.is_empty() && !form.body.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Renders validation messages, one `field: message` per line.
#[must_use]
pub fn field_errors(errors: &BTreeMap<&'static str, &'static str>) -> String {
    errors.iter().fold(String::new(), |mut out, (field, message)| {
        let _ = writeln!(out, "{field}: {message}");
        out
    })
}

/// One-line summary of an email returned by the server.
#[must_use]
pub fn summary(email: &Email) -> String {
    let id = email
        .id
        .map_or_else(|| "unsaved".to_string(), |id| format!("#{id}"));
    format!(
        "{id} {} to {} [{}]",
        email.email_type.label(),
        if email.to_email.is_empty() {
            "(no recipient)"
        } else {
            email.to_email.as_str()
        },
        email.status
    )
}
