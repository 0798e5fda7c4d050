//! Contact tracking operations.
//!
//! Activity recorded for a single contact across campaigns. This endpoint
//! family wraps list responses in the [`ResultSet`] envelope — not
//! interchangeable with the [`Paged`](crate::api::Paged) envelope used by
//! the campaign tracking family, so each family's next links only fit its
//! own `*_page` methods.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::api::{
    build_url, require_non_empty, validate_limit, ApiClient, ResultSet, ServiceError,
};
use crate::resources::contact_tracking::{CampaignSummaryReport, ContactSummaryReport};
use crate::resources::tracking::{
    BounceReport, ClickReport, ForwardReport, OpenReport, OptOutReport, SendReport,
    TrackingActivity,
};
use crate::services::format_timestamp;

const SUMMARY: &str = "v2/contacts/{contactId}/tracking/reports/summary";
const SUMMARY_BY_CAMPAIGN: &str = "v2/contacts/{contactId}/tracking/reports/summaryByCampaign";
const ACTIVITIES: &str = "v2/contacts/{contactId}/tracking";
const BOUNCES: &str = "v2/contacts/{contactId}/tracking/bounces";
const CLICKS: &str = "v2/contacts/{contactId}/tracking/clicks";
const FORWARDS: &str = "v2/contacts/{contactId}/tracking/forwards";
const OPENS: &str = "v2/contacts/{contactId}/tracking/opens";
const SENDS: &str = "v2/contacts/{contactId}/tracking/sends";
const UNSUBSCRIBES: &str = "v2/contacts/{contactId}/tracking/unsubscribes";

/// Service for the contact tracking endpoint family.
#[derive(Clone, Debug)]
pub struct ContactTrackingService {
    client: ApiClient,
}

impl ContactTrackingService {
    /// Creates the service on top of an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the aggregate tracking summary for a contact.
    ///
    /// Returns `None` when the server has not generated the summary yet
    /// (empty response body).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn summary(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
    ) -> Result<Option<ContactSummaryReport>, ServiceError> {
        require_non_empty(contact_id, "contact_id")?;
        let path = build_url(
            SUMMARY,
            &[("contactId", contact_id)],
            &[("created_since", created_since.map(format_timestamp))],
        )?;
        self.client.get_optional(path).await
    }

    /// Fetches per-campaign tracking rollups for a contact.
    ///
    /// The endpoint returns a plain JSON array, not a paged envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn summary_by_campaign(
        &self,
        contact_id: &str,
    ) -> Result<Vec<CampaignSummaryReport>, ServiceError> {
        require_non_empty(contact_id, "contact_id")?;
        let path = build_url(SUMMARY_BY_CAMPAIGN, &[("contactId", contact_id)], &[])?;
        self.client.get(path).await
    }

    /// Lists all tracked activity for a contact, across activity types.
    ///
    /// Results are decoded through the `activity_type` tag into
    /// [`TrackingActivity`] variants.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn activities(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<TrackingActivity>, ServiceError> {
        self.tracked(ACTIVITIES, contact_id, created_since, limit).await
    }

    /// Fetches the next page of mixed activity from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn activities_page(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<TrackingActivity>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists bounce reports for a contact.
    ///
    /// The bounces endpoint takes no date filter, only a page size.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn bounces(
        &self,
        contact_id: &str,
        limit: Option<u16>,
    ) -> Result<ResultSet<BounceReport>, ServiceError> {
        self.tracked(BOUNCES, contact_id, None, limit).await
    }

    /// Fetches the next page of bounce reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn bounces_page(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<BounceReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists click reports for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn clicks(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<ClickReport>, ServiceError> {
        self.tracked(CLICKS, contact_id, created_since, limit).await
    }

    /// Fetches the next page of click reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn clicks_page(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<ClickReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists forward reports for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn forwards(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<ForwardReport>, ServiceError> {
        self.tracked(FORWARDS, contact_id, created_since, limit).await
    }

    /// Fetches the next page of forward reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn forwards_page(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<ForwardReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists open reports for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn opens(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<OpenReport>, ServiceError> {
        self.tracked(OPENS, contact_id, created_since, limit).await
    }

    /// Fetches the next page of open reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn opens_page(&self, next_link: &str) -> Result<ResultSet<OpenReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists send reports for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn sends(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<SendReport>, ServiceError> {
        self.tracked(SENDS, contact_id, created_since, limit).await
    }

    /// Fetches the next page of send reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn sends_page(&self, next_link: &str) -> Result<ResultSet<SendReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// Lists opt-out (unsubscribe) reports for a contact.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn opt_outs(
        &self,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<OptOutReport>, ServiceError> {
        self.tracked(UNSUBSCRIBES, contact_id, created_since, limit).await
    }

    /// Fetches the next page of opt-out reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn opt_outs_page(
        &self,
        next_link: &str,
    ) -> Result<ResultSet<OptOutReport>, ServiceError> {
        self.client.follow_result_set(next_link).await
    }

    /// The shared list shape: validate, build, fetch one page.
    async fn tracked<T: DeserializeOwned>(
        &self,
        template: &str,
        contact_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<ResultSet<T>, ServiceError> {
        require_non_empty(contact_id, "contact_id")?;
        validate_limit(limit)?;
        let path = build_url(
            template,
            &[("contactId", contact_id)],
            &[
                ("created_since", created_since.map(format_timestamp)),
                ("limit", limit.map(|l| l.to_string())),
            ],
        )?;
        self.client.get(path).await
    }
}
