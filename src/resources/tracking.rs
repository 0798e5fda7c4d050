//! Campaign tracking report resources.
//!
//! Every tracking report shares four base fields (`campaign_id`,
//! `contact_id`, `activity_type`, `email_address`) plus variant-specific
//! data. The shared fields live in [`ReportBase`] and are flattened into
//! each variant, so the JSON stays flat while the Rust side composes rather
//! than inherits.
//!
//! The `activity_type` field is a type tag: mixed-activity endpoints are
//! decoded through [`TrackingActivity`], an internally tagged union that
//! dispatches on it. Endpoints that return a single report kind decode the
//! concrete struct directly (the tag field is simply ignored there).
//!
//! # Example
//!
//! ```rust
//! use constant_contact_api::resources::TrackingActivity;
//!
//! let json = r#"{
//!     "activity_type": "EMAIL_SEND",
//!     "campaign_id": "1100394165290",
//!     "contact_id": "238",
//!     "email_address": "null@dev.net",
//!     "send_date": "2024-03-04T17:04:06Z"
//! }"#;
//!
//! let activity: TrackingActivity = serde_json::from_str(json).unwrap();
//! assert!(matches!(activity, TrackingActivity::Send(_)));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by every tracking report variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportBase {
    /// The campaign the activity belongs to.
    #[serde(default)]
    pub campaign_id: String,
    /// The contact that performed (or received) the activity.
    #[serde(default)]
    pub contact_id: String,
    /// The contact's email address at the time of the activity.
    #[serde(default)]
    pub email_address: String,
}

/// Why a send bounced, as reported by the receiving server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceCode {
    /// Non-existent address.
    B,
    /// Undeliverable.
    D,
    /// Mailbox full.
    F,
    /// Suspended address.
    S,
    /// Vacation / autoreply.
    V,
    /// Other.
    X,
    /// Blocked.
    Z,
}

/// A bounce recorded for a campaign send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BounceReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// The bounce category code.
    pub bounce_code: BounceCode,
    /// Short description of the bounce category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_description: Option<String>,
    /// The receiving server's message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_message: Option<String>,
    /// When the bounce occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_date: Option<DateTime<Utc>>,
}

/// A click on a tracked link in a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// The clicked link's id; matches `url_uid` in the campaign's
    /// click-through details.
    #[serde(default)]
    pub link_id: String,
    /// When the click occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_date: Option<DateTime<Utc>>,
}

/// A forward of a campaign email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// When the forward occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<DateTime<Utc>>,
}

/// An open of a campaign email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// When the open occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_date: Option<DateTime<Utc>>,
}

/// A delivery of a campaign email to a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// When the send occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_date: Option<DateTime<Utc>>,
}

/// Who initiated an unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptOutSource {
    /// The contact unsubscribed themselves.
    #[serde(rename = "ACTION_BY_CUSTOMER")]
    ActionByCustomer,
    /// The account owner unsubscribed the contact.
    #[serde(rename = "ACTION_BY_OWNER")]
    ActionByOwner,
}

/// An unsubscribe (opt-out) from a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptOutReport {
    /// Shared report fields.
    #[serde(flatten)]
    pub base: ReportBase,
    /// When the unsubscribe occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribe_date: Option<DateTime<Utc>>,
    /// Who initiated the unsubscribe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribe_source: Option<OptOutSource>,
    /// Free-text reason supplied by the contact, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsubscribe_reason: Option<String>,
}

/// Aggregate tracking counters for a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSummary {
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

/// A tracking report of any kind, discriminated by the `activity_type`
/// JSON field.
///
/// Used by endpoints that return mixed activity streams. Decoding reads the
/// tag first and dispatches to the matching variant's field set; an
/// unrecognized tag is a decode error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "activity_type")]
pub enum TrackingActivity {
    /// A bounce.
    #[serde(rename = "EMAIL_BOUNCE")]
    Bounce(BounceReport),
    /// A link click.
    #[serde(rename = "EMAIL_CLICK")]
    Click(ClickReport),
    /// A forward.
    #[serde(rename = "EMAIL_FORWARD")]
    Forward(ForwardReport),
    /// An open.
    #[serde(rename = "EMAIL_OPEN")]
    Open(OpenReport),
    /// A send.
    #[serde(rename = "EMAIL_SEND")]
    Send(SendReport),
    /// An unsubscribe.
    #[serde(rename = "EMAIL_UNSUBSCRIBE")]
    OptOut(OptOutReport),
}

impl TrackingActivity {
    /// Returns the shared base fields of whichever variant this is.
    #[must_use]
    pub const fn base(&self) -> &ReportBase {
        match self {
            Self::Bounce(r) => &r.base,
            Self::Click(r) => &r.base,
            Self::Forward(r) => &r.base,
            Self::Open(r) => &r.base,
            Self::Send(r) => &r.base,
            Self::OptOut(r) => &r.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> ReportBase {
        ReportBase {
            campaign_id: "1100394165290".to_string(),
            contact_id: "238".to_string(),
            email_address: "null@dev.net".to_string(),
        }
    }

    #[test]
    fn test_send_report_round_trip() {
        let report = SendReport {
            base: base(),
            send_date: Some(Utc.with_ymd_and_hms(2024, 3, 4, 17, 4, 6).unwrap()),
        };

        let json = serde_json::to_string(&report).unwrap();
        let restored: SendReport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_bounce_report_decodes_wire_format() {
        let json = r#"{
            "activity_type": "EMAIL_BOUNCE",
            "campaign_id": "1100394165290",
            "contact_id": "238",
            "email_address": "null@dev.net",
            "bounce_code": "B",
            "bounce_description": "Non-existent address",
            "bounce_message": "550 5.1.1 unknown user",
            "bounce_date": "2024-03-04T18:55:00Z"
        }"#;

        let report: BounceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.base.campaign_id, "1100394165290");
        assert_eq!(report.bounce_code, BounceCode::B);
        assert_eq!(
            report.bounce_description.as_deref(),
            Some("Non-existent address")
        );
    }

    #[test]
    fn test_tracking_activity_dispatches_on_tag() {
        let json = r#"{
            "activity_type": "EMAIL_CLICK",
            "campaign_id": "1100394165290",
            "contact_id": "238",
            "email_address": "null@dev.net",
            "link_id": "3",
            "click_date": "2024-03-05T09:12:44Z"
        }"#;

        let activity: TrackingActivity = serde_json::from_str(json).unwrap();
        match &activity {
            TrackingActivity::Click(click) => assert_eq!(click.link_id, "3"),
            other => panic!("expected click, got {other:?}"),
        }
        assert_eq!(activity.base().contact_id, "238");
    }

    #[test]
    fn test_tracking_activity_rejects_unknown_tag() {
        let json = r#"{
            "activity_type": "EMAIL_TELEPORT",
            "campaign_id": "1",
            "contact_id": "2",
            "email_address": "a@b.c"
        }"#;

        let result = serde_json::from_str::<TrackingActivity>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_every_tracking_activity_variant_round_trips() {
        let date = Some(Utc.with_ymd_and_hms(2024, 3, 4, 17, 4, 6).unwrap());
        let activities = vec![
            TrackingActivity::Bounce(BounceReport {
                base: base(),
                bounce_code: BounceCode::D,
                bounce_description: Some("Undeliverable".to_string()),
                bounce_message: None,
                bounce_date: date,
            }),
            TrackingActivity::Click(ClickReport {
                base: base(),
                link_id: "7".to_string(),
                click_date: date,
            }),
            TrackingActivity::Forward(ForwardReport {
                base: base(),
                forward_date: date,
            }),
            TrackingActivity::Open(OpenReport {
                base: base(),
                open_date: date,
            }),
            TrackingActivity::Send(SendReport {
                base: base(),
                send_date: date,
            }),
            TrackingActivity::OptOut(OptOutReport {
                base: base(),
                unsubscribe_date: date,
                unsubscribe_source: Some(OptOutSource::ActionByCustomer),
                unsubscribe_reason: Some("no longer interested".to_string()),
            }),
        ];

        for activity in activities {
            let json = serde_json::to_string(&activity).unwrap();
            let restored: TrackingActivity = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, activity, "round trip failed for {json}");
        }
    }

    #[test]
    fn test_tracking_activity_serializes_tag_field() {
        let activity = TrackingActivity::Open(OpenReport {
            base: base(),
            open_date: None,
        });

        let value = serde_json::to_value(&activity).unwrap();
        assert_eq!(value["activity_type"], "EMAIL_OPEN");
        assert_eq!(value["email_address"], "null@dev.net");
    }

    #[test]
    fn test_tracking_summary_decodes_counters() {
        let json = r#"{
            "sends": 50, "opens": 30, "clicks": 12,
            "forwards": 2, "unsubscribes": 1, "bounces": 5
        }"#;

        let summary: TrackingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.sends, 50);
        assert_eq!(summary.bounces, 5);
    }

    #[test]
    fn test_structural_equality_over_all_fields() {
        let a = SendReport {
            base: base(),
            send_date: None,
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.base.email_address = "other@dev.net".to_string();
        assert_ne!(a, b);
    }
}
