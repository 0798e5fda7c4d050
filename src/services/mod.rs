//! Service façades, one per resource family.
//!
//! Each service composes the request builder, transport client, error
//! mapper, and JSON codec from [`crate::api`] into one method per supported
//! API operation. Every method follows the same contract:
//!
//! 1. Validate arguments — non-empty identifiers, in-range limits — and
//!    fail fast with [`ServiceError::InvalidArgument`](crate::api::ServiceError)
//!    before any network activity.
//! 2. Build the request path from the endpoint template.
//! 3. Perform one HTTP call, classify, decode.
//!
//! Services hold no state besides a handle on the [`ApiClient`](crate::api::ApiClient);
//! they are cheap to clone and safe to share across concurrent tasks.
//! Follow-next-link methods accept the opaque link from a previous page's
//! metadata verbatim.

mod account;
mod campaign_tracking;
mod campaigns;
mod contact_tracking;
mod contacts;

pub use account::AccountService;
pub use campaign_tracking::CampaignTrackingService;
pub use campaigns::CampaignService;
pub use contact_tracking::ContactTrackingService;
pub use contacts::ContactService;

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a date filter the way the API expects (ISO-8601, UTC).
pub(crate) fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp_is_iso_8601_utc() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 4, 17, 4, 6).unwrap();
        assert_eq!(format_timestamp(timestamp), "2024-03-04T17:04:06.000Z");
    }
}
