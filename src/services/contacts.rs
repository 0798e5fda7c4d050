//! Contact operations.

use chrono::{DateTime, Utc};

use crate::api::{
    build_url, require_non_empty, validate_limit, ApiClient, InvalidArgumentError, Paged,
    ServiceError,
};
use crate::resources::contacts::{ActionBy, Contact, ContactStatus};
use crate::services::format_timestamp;

const CONTACTS: &str = "v2/contacts";
const CONTACT: &str = "v2/contacts/{contactId}";

/// Service for contact operations.
///
/// Mutations carry the API's `action_by` query parameter, recording whether
/// the account owner or the contact themselves initiated the change.
///
/// # Example
///
/// ```rust,ignore
/// let contacts = ContactService::new(client.clone());
///
/// let page = contacts
///     .contacts(Some("ada@example.com"), None, None, Some(50))
///     .await?;
/// if let Some(existing) = page.results.first() {
///     println!("already registered: {:?}", existing.id);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ContactService {
    client: ApiClient,
}

impl ContactService {
    /// Creates the service on top of an API client.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists contacts, optionally filtered by email address, modification
    /// date, and status.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an out-of-range limit or any request
    /// failure.
    pub async fn contacts(
        &self,
        email: Option<&str>,
        modified_since: Option<DateTime<Utc>>,
        status: Option<ContactStatus>,
        limit: Option<u16>,
    ) -> Result<Paged<Contact>, ServiceError> {
        validate_limit(limit)?;
        let path = build_url(
            CONTACTS,
            &[],
            &[
                ("email", email.map(ToString::to_string)),
                ("modified_since", modified_since.map(format_timestamp)),
                ("status", status.map(|s| status_param(s).to_string())),
                ("limit", limit.map(|l| l.to_string())),
            ],
        )?;
        self.client.get(path).await
    }

    /// Fetches the next page of contacts from a previous page's link.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on an empty link or any request failure.
    pub async fn contacts_page(&self, next_link: &str) -> Result<Paged<Contact>, ServiceError> {
        self.client.follow_paged(next_link).await
    }

    /// Fetches a single contact by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure;
    /// an unknown id surfaces as an API error with status 404.
    pub async fn contact(&self, contact_id: &str) -> Result<Contact, ServiceError> {
        require_non_empty(contact_id, "contact_id")?;
        let path = build_url(CONTACT, &[("contactId", contact_id)], &[])?;
        self.client.get(path).await
    }

    /// Creates a new contact.
    ///
    /// Returns the created contact with server-assigned fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on any request failure.
    pub async fn add_contact(
        &self,
        contact: &Contact,
        action_by: ActionBy,
    ) -> Result<Contact, ServiceError> {
        let path = build_url(
            CONTACTS,
            &[],
            &[("action_by", Some(action_by.as_str().to_string()))],
        )?;
        self.client.post(path, contact).await
    }

    /// Updates an existing contact, addressed by its embedded id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidArgument`] if the contact carries no
    /// id, or any request failure.
    pub async fn update_contact(
        &self,
        contact: &Contact,
        action_by: ActionBy,
    ) -> Result<Contact, ServiceError> {
        let contact_id = contact
            .id
            .as_deref()
            .ok_or(InvalidArgumentError::EmptyArgument { name: "contact.id" })?;
        require_non_empty(contact_id, "contact.id")?;
        let path = build_url(
            CONTACT,
            &[("contactId", contact_id)],
            &[("action_by", Some(action_by.as_str().to_string()))],
        )?;
        self.client.put(path, contact).await
    }

    /// Deletes (unsubscribes) a contact. A 204 response is success.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] on invalid arguments or any request failure.
    pub async fn delete_contact(&self, contact_id: &str) -> Result<(), ServiceError> {
        require_non_empty(contact_id, "contact_id")?;
        let path = build_url(CONTACT, &[("contactId", contact_id)], &[])?;
        self.client.delete(path).await
    }
}

/// The wire value of a status filter.
const fn status_param(status: ContactStatus) -> &'static str {
    match status {
        ContactStatus::Active => "ACTIVE",
        ContactStatus::Unconfirmed => "UNCONFIRMED",
        ContactStatus::OptOut => "OPTOUT",
        ContactStatus::Removed => "REMOVED",
        ContactStatus::NonSubscriber => "NON_SUBSCRIBER",
        ContactStatus::Visitor => "VISITOR",
    }
}
