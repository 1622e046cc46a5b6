//! Outbound compose request.

use serde::{Deserialize, Serialize};

/// Body of a send or save-as-draft call.
///
/// Carries no identifier or status; both are assigned by the server.
/// Empty `cc`/`bcc` are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    /// Recipient address.
    #[serde(default)]
    pub to: String,
    /// CC address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cc: String,
    /// BCC address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bcc: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[serde(default)]
    pub body: String,
    /// Whether `body` is HTML.
    #[serde(rename = "isHtml", alias = "html", default)]
    pub is_html: bool,
}

impl EmailRequest {
    /// Creates a new plain-text request.
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Sets the CC address.
    #[must_use]
    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        self.cc = cc.into();
        self
    }

    /// Sets the BCC address.
    #[must_use]
    pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc = bcc.into();
        self
    }

    /// Marks the body as HTML.
    #[must_use]
    pub const fn html(mut self, is_html: bool) -> Self {
        self.is_html = is_html;
        self
    }

    /// Returns a copy with surrounding whitespace removed from the address fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            to: self.to.trim().to_string(),
            cc: self.cc.trim().to_string(),
            bcc: self.bcc.trim().to_string(),
            ..self.clone()
        }
    }

    /// Whether every field is at its default value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
