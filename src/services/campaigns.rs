//! Email campaign operations.

use chrono::{DateTime, Utc};

use crate::api::{
    build_url, require_non_empty, validate_limit, ApiClient, InvalidArgumentError, Paged,
    ServiceError,
};
use crate::resources::campaigns::Campaign;
use crate::services::format_timestamp;

const CAMPAIGNS: &str = "v2/emailmarketing/campaigns";
const CAMPAIGN: &str = "v2/emailmarketing/campaigns/{campaignId}";

/// Service for email campaign operations.
#[derive(Clone, Debug)]
pub struct CampaignService {
    client: ApiClient,
}

impl CampaignService {
    /// Creates the service on top of an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists campaigns, optionally filtered by modification date.
    ///
    /// The list endpoint returns a thin projection of each campaign; fetch
    /// a single campaign for the full record.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an out-of-range limit or any request
    /// failure.
    pub async fn campaigns(
        &self,
        modified_since: Option<DateTime<Utc>>,
        limit: Option<u16>,
    ) -> Result<Paged<Campaign>, ServiceError> {
        validate_limit(limit)?;
        let path = build_url(
            CAMPAIGNS,
            &[],
            &[
                ("modified_since", modified_since.map(format_timestamp)),
                ("limit", limit.map(|l| l.to_string())),
            ],
        )?;
        self.client.get(path).await
    }

    /// Fetches the next page of campaigns from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn campaigns_page(&self, next_link: &str) -> Result<Paged<Campaign>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Fetches a single campaign by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn campaign(&self, campaign_id: &str) -> Result<Campaign, ServiceError> {
        require_non_empty(campaign_id, "campaign_id")?;
        let path = build_url(CAMPAIGN, &[("campaignId", campaign_id)], &[])?;
        self.client.get(path).await
    }

    /// Creates a new campaign.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on any request failure.
    pub async fn add_campaign(&self, campaign: &Campaign) -> Result<Campaign, ServiceError> {
        self.client.post(CAMPAIGNS.to_string(), campaign).await
    }

    /// Updates an existing campaign, addressed by its embedded id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] if the campaign carries no
    /// id, or any request failure.
    pub async fn update_campaign(&self, campaign: &Campaign) -> Result<Campaign, ServiceError> {
        let campaign_id = campaign
            .id
            .as_deref()
            .ok_or(InvalidArgumentError::EmptyArgument { name: "campaign.id" })?;
        require_non_empty(campaign_id, "campaign.id")?;
        let path = build_url(CAMPAIGN, &[("campaignId", campaign_id)], &[])?;
        self.client.put(path, campaign).await
    }

    /// Deletes a campaign. A 204 response is success.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn delete_campaign(&self, campaign_id: &str) -> Result<(), ServiceError> {
        require_non_empty(campaign_id, "campaign_id")?;
        let path = build_url(CAMPAIGN, &[("campaignId", campaign_id)], &[])?;
        self.client.delete(path).await
    }
}
