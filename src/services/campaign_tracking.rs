//! Campaign tracking operations.
//!
//! Reports on how a sent campaign performed: bounces, clicks, forwards,
//! opens, sends, and opt-outs, plus an aggregate summary. List responses
//! arrive in the [`Paged`] envelope; pass a page's next link to the
//! matching `*_page` method to continue.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::api::{
    build_url, require_non_empty, validate_limit, ApiClient, Paged, ServiceError,
};
use crate::resources::tracking::{
    BounceReport, ClickReport, ForwardReport, OpenReport, OptOutReport, SendReport,
    TrackingSummary,
};
use crate::services::format_timestamp;

const SUMMARY: &str =
    "v2/emailmarketing/campaigns/{campaignId}/tracking/reports/summary?updateSummary=true";
const BOUNCES: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/bounces";
const CLICKS: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/clicks";
const CLICKS_BY_LINK: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/clicks/{linkId}";
const FORWARDS: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/forwards";
const OPENS: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/opens";
const SENDS: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/sends";
const UNSUBSCRIBES: &str = "v2/emailmarketing/campaigns/{campaignId}/tracking/unsubscribes";

/// Service for the campaign tracking endpoint family.
///
/// # Example
///
/// ```rust,ignore
/// let tracking = CampaignTrackingService::new(client.clone());
///
/// let mut page = tracking.bounces("1100394165290", None, Some(250)).await?;
/// loop {
///     for bounce in &page.results {
///         println!("{} bounced: {:?}", bounce.base.email_address, bounce.bounce_code);
///     }
///     match page.next_link() {
///         Some(link) => page = tracking.bounces_page(link).await?,
///         None => break,
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CampaignTrackingService {
    client: ApiClient,
}

impl CampaignTrackingService {
    /// Creates the service on top of an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the aggregate tracking summary of a campaign.
    ///
    /// Returns `None` when the server has not generated the summary yet
    /// (empty response body).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn summary(&self, campaign_id: &str) -> Result<Option<TrackingSummary>, ServiceError> {
        require_non_empty(campaign_id, "campaign_id")?;
        let path = build_url(SUMMARY, &[("campaignId", campaign_id)], &[])?;
        self.client.get_optional(path).await
    }

    /// Lists bounce reports for a campaign.
    ///
    /// `created_since` restricts results to reports created after the given
    /// instant; `limit` is the page size (1–500).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn bounces(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<BounceReport>, ServiceError> {
        self.reports(BOUNCES, campaign_id, created_since, limit).await
    }

    /// Fetches the next page of bounce reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn bounces_page(&self, next_link: &str) -> Result<Paged<BounceReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Lists click reports for a campaign, across all links.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn clicks(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<ClickReport>, ServiceError> {
        self.reports(CLICKS, campaign_id, created_since, limit).await
    }

    /// Lists click reports for one tracked link of a campaign.
    ///
    /// `link_id` is the `url_uid` found in the campaign's click-through
    /// details.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn clicks_for_link(
        &self,
        campaign_id: &str,
        link_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<ClickReport>, ServiceError> {
        require_non_empty(campaign_id, "campaign_id")?;
        require_non_empty(link_id, "link_id")?;
        validate_limit(limit)?;
        let path = build_url(
            CLICKS_BY_LINK,
            &[("campaignId", campaign_id), ("linkId", link_id)],
            &[
                ("created_since", created_since.map(format_timestamp)),
                ("limit", limit.map(|l| l.to_string())),
            ],
        )?;
        self.client.get(path).await
    }

    /// Fetches the next page of click reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn clicks_page(&self, next_link: &str) -> Result<Paged<ClickReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Lists forward reports for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn forwards(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<ForwardReport>, ServiceError> {
        self.reports(FORWARDS, campaign_id, created_since, limit).await
    }

    /// Fetches the next page of forward reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn forwards_page(
        &self,
        next_link: &str,
    ) -> Result<Paged<ForwardReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Lists open reports for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn opens(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<OpenReport>, ServiceError> {
        self.reports(OPENS, campaign_id, created_since, limit).await
    }

    /// Fetches the next page of open reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn opens_page(&self, next_link: &str) -> Result<Paged<OpenReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Lists send reports for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn sends(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<SendReport>, ServiceError> {
        self.reports(SENDS, campaign_id, created_since, limit).await
    }

    /// Fetches the next page of send reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn sends_page(&self, next_link: &str) -> Result<Paged<SendReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Lists opt-out (unsubscribe) reports for a campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn opt_outs(
        &self,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<OptOutReport>, ServiceError> {
        self.reports(UNSUBSCRIBES, campaign_id, created_since, limit).await
    }

    /// Fetches the next page of opt-out reports from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn opt_outs_page(
        &self,
        next_link: &str,
    ) -> Result<Paged<OptOutReport>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// The shared list shape: validate, build, fetch one page.
    async fn reports<T: DeserializeOwned>(
        &self,
        template: &str,
        campaign_id: &str,
        created_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<T>, ServiceError> {
        require_non_empty(campaign_id, "campaign_id")?;
        validate_limit(limit)?;
        let path = build_url(
            template,
            &[("campaignId", campaign_id)],
            &[
                ("created_since", created_since.map(format_timestamp)),
                ("limit", limit.map(|l| l.to_string())),
            ],
        )?;
        self.client.get(path).await
    }
}
