//! Contact tracking report resources.
//!
//! These are the per-contact rollups returned by the contact tracking
//! endpoints; the individual activity records reuse the report types from
//! [`crate::resources::tracking`].

use serde::{Deserialize, Serialize};

/// Aggregate tracking counters for a single contact, across campaigns.
///
/// The server may not have generated this rollup yet, in which case the
/// summary endpoint answers with an empty body and the service returns
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSummaryReport {
    /// The contact the counters belong to.
    #[serde(default)]
    pub contact_id: String,
    /// The contact's email address.
    #[serde(default)]
    pub email_address: String,
    /// Number of sends.
    #[serde(default)]
    pub sends: u64,
    /// Number of opens.
    #[serde(default)]
    pub opens: u64,
    /// Number of clicks.
    #[serde(default)]
    pub clicks: u64,
    /// Number of forwards.
    #[serde(default)]
    pub forwards: u64,
    /// Number of unsubscribes.
    #[serde(default)]
    pub unsubscribes: u64,
    /// Number of bounces.
    #[serde(default)]
    pub bounces: u64,
}

/// Per-campaign tracking counters for a single contact.
///
/// Returned as a plain JSON array by the summary-by-campaign endpoint —
/// no pagination envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummaryReport {
    /// The campaign the counters belong to.
    #[serde(default)]
    pub campaign_id: String,
    /// Number of sends.
    #[serde(default)]
    pub sends: u64,
    /// Number of opens.
    #[serde(default)]
    pub opens: u64,
    /// Number of clicks.
    #[serde(default)]
    pub clicks: u64,
    /// Number of forwards.
    #[serde(default)]
    pub forwards: u64,
    /// Number of bounces.
    #[serde(default)]
    pub bounces: u64,
}
