//! Account settings operations.

use crate::api::{build_url, ApiClient, ServiceError};
use crate::resources::account::{AccountEmailAddress, AccountEmailAddressStatus, AccountSummaryInfo};

const ACCOUNT_INFO: &str = "v2/account/info";
const VERIFIED_EMAIL_ADDRESSES: &str = "v2/account/verifiedemailaddresses";

/// Service for account settings operations.
#[derive(Clone, Debug)]
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    /// Creates the service on top of an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on any request failure.
    pub async fn summary_info(&self) -> Result<AccountSummaryInfo, ServiceError> {
        self.client.get(ACCOUNT_INFO.to_string()).await
    }

    /// Updates the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on any request failure.
    pub async fn update_summary_info(
        &self,
        info: &AccountSummaryInfo,
    ) -> Result<AccountSummaryInfo, ServiceError> {
        self.client.put(ACCOUNT_INFO.to_string(), info).await
    }

    /// Lists the account's registered sender addresses, optionally filtered
    /// by verification status.
    ///
    /// The endpoint returns a plain JSON array, not a paged envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on any request failure.
    pub async fn verified_email_addresses(
        &self,
        status: Option<AccountEmailAddressStatus>,
    ) -> Result<Vec<AccountEmailAddress>, ServiceError> {
        let status = status.map(|s| {
            match s {
                AccountEmailAddressStatus::Confirmed => "CONFIRMED",
                AccountEmailAddressStatus::Unconfirmed => "UNCONFIRMED",
            }
            .to_string()
        });
        let path = build_url(VERIFIED_EMAIL_ADDRESSES, &[], &[("status", status)])?;
        self.client.get(path).await
    }
}
