//! Email campaign resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an email campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignStatus {
    /// Being composed; not yet sent.
    #[serde(rename = "DRAFT")]
    Draft,
    /// Currently sending.
    #[serde(rename = "RUNNING")]
    Running,
    /// Sent to completion.
    #[serde(rename = "SENT")]
    Sent,
    /// Scheduled for a future send.
    #[serde(rename = "SCHEDULED")]
    Scheduled,
    /// Deleted.
    #[serde(rename = "DELETED")]
    Deleted,
}

/// A tracked link within a sent campaign.
///
/// The `url_uid` is the `link_id` accepted by the clicks-by-link tracking
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickThroughDetail {
    /// The link target.
    #[serde(default)]
    pub url: String,
    /// Server-assigned id of the link.
    #[serde(default)]
    pub url_uid: String,
    /// How many times the link was clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_count: Option<u64>,
}

/// An email campaign.
///
/// Server-assigned fields (`id`, `status`, dates, click-through details)
/// are skipped when serializing a new campaign for creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// The canonical server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Campaign name, unique within the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Sender display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    /// Sender address; must be a verified account address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    /// Reply-to address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_email: Option<String>,
    /// Lifecycle state. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    /// Whether the permission reminder is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_permission_reminder_enabled: Option<bool>,
    /// The permission reminder text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_reminder_text: Option<String>,
    /// HTML content of the email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_content: Option<String>,
    /// Content format (e.g. `HTML`, `XHTML`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_content_format: Option<String>,
    /// Plain-text alternative content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// When the campaign was created. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the campaign was last modified. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
    /// Tracked links in the sent email. Read-only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub click_through_details: Vec<ClickThroughDetail>,
}
