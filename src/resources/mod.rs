//! Resource models for the Constant Contact API.
//!
//! Plain data records mirroring the API's JSON resources. All types derive
//! `Serialize`/`Deserialize` with per-field name mapping, plus structural
//! (`PartialEq`) equality — they are value objects created by JSON decoding
//! and owned by whoever receives them.
//!
//! - [`account`]: account profile and verified sender addresses
//! - [`campaigns`]: email campaigns and their tracked links
//! - [`contacts`]: contacts, email addresses, list memberships
//! - [`tracking`]: campaign tracking reports, including the
//!   `activity_type`-tagged [`TrackingActivity`] union
//! - [`contact_tracking`]: per-contact tracking rollups

pub mod account;
pub mod campaigns;
pub mod contact_tracking;
pub mod contacts;
pub mod tracking;

pub use account::{
    AccountEmailAddress, AccountEmailAddressStatus, AccountSummaryInfo, OrganizationAddress,
};
pub use campaigns::{Campaign, CampaignStatus, ClickThroughDetail};
pub use contact_tracking::{CampaignSummaryReport, ContactSummaryReport};
pub use contacts::{
    ActionBy, ConfirmStatus, Contact, ContactListRef, ContactStatus, EmailAddress,
};
pub use tracking::{
    BounceCode, BounceReport, ClickReport, ForwardReport, OpenReport, OptOutReport, OptOutSource,
    ReportBase, SendReport, TrackingActivity, TrackingSummary,
};
