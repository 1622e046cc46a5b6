//! Email record as returned by the mail API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EmailId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Delivery status of an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    /// Not sent yet.
    Draft,
    /// Handed to the mail transport.
    Sent,
    /// Confirmed delivered.
    Delivered,
    /// Delivery failed.
    Failed,
    /// Received and read.
    Read,
    /// Received, not read yet.
    Unread,
}

impl EmailStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Sent => "SENT",
            Self::Delivered => "DELIVERED",
            Self::Failed => "FAILED",
            Self::Read => "READ",
            Self::Unread => "UNREAD",
        }
    }
}

impl std::fmt::Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which list an email belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailType {
    /// Outgoing mail.
    Sent,
    /// Incoming mail.
    Received,
    /// Unsent draft.
    Draft,
}

impl EmailType {
    /// All types, in list display order.
    pub const ALL: [Self; 3] = [Self::Sent, Self::Received, Self::Draft];

    /// Human-readable list label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Received => "Received",
            Self::Draft => "Drafts",
        }
    }
}

/// A persisted email record.
///
/// `id` is always present on records returned by the server; it is only
/// absent on drafts that have not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmailId>,
    /// Sender address.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub from_email: String,
    /// Recipient address.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub to_email: String,
    /// CC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_email: Option<String>,
    /// BCC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc_email: Option<String>,
    /// Subject line.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    /// Message body.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
    /// When the email was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_date: Option<NaiveDateTime>,
    /// When the email was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_date: Option<NaiveDateTime>,
    /// Delivery status.
    pub status: EmailStatus,
    /// List classification.
    #[serde(rename = "type")]
    pub email_type: EmailType,
}

impl Email {
    /// Date shown for this email in lists: the received date for incoming
    /// mail, the sent date otherwise.
    #[must_use]
    pub const fn display_date(&self) -> Option<&NaiveDateTime> {
        match self.email_type {
            EmailType::Received => self.received_date.as_ref(),
            EmailType::Sent | EmailType::Draft => self.sent_date.as_ref(),
        }
    }

    /// CC address, if set and non-empty.
    #[must_use]
    pub fn cc(&self) -> Option<&str> {
        non_empty(self.cc_email.as_deref())
    }

    /// BCC address, if set and non-empty.
    #[must_use]
    pub fn bcc(&self) -> Option<&str> {
        non_empty(self.bcc_email.as_deref())
    }

    /// Whether this email is an unsent draft.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.email_type == EmailType::Draft || self.status == EmailStatus::Draft
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reads `null` text columns as empty strings.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
