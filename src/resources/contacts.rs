//! Contact resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription status of a contact or email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    /// Subscribed and reachable.
    #[serde(rename = "ACTIVE")]
    Active,
    /// Added but not yet confirmed.
    #[serde(rename = "UNCONFIRMED")]
    Unconfirmed,
    /// Unsubscribed.
    #[serde(rename = "OPTOUT")]
    OptOut,
    /// Removed from all lists.
    #[serde(rename = "REMOVED")]
    Removed,
    /// Known address that never subscribed.
    #[serde(rename = "NON_SUBSCRIBER")]
    NonSubscriber,
    /// Site visitor record.
    #[serde(rename = "VISITOR")]
    Visitor,
}

/// Confirmation state of an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmStatus {
    /// The address was confirmed by the contact.
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    /// Confirmation is not required for this account.
    #[serde(rename = "NO_CONFIRMATION_REQUIRED")]
    NoConfirmationRequired,
    /// The address has not been confirmed.
    #[serde(rename = "UNCONFIRMED")]
    Unconfirmed,
}

/// Who performs a contact mutation, as required by the API's `action_by`
/// query parameter. Affects how the server treats confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionBy {
    /// The account owner made the change.
    #[serde(rename = "ACTION_BY_OWNER")]
    Owner,
    /// The contact themselves made the change.
    #[serde(rename = "ACTION_BY_VISITOR")]
    Visitor,
}

impl ActionBy {
    /// The wire value used in the `action_by` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "ACTION_BY_OWNER",
            Self::Visitor => "ACTION_BY_VISITOR",
        }
    }
}

/// An email address attached to a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    /// The address itself.
    pub email_address: String,
    /// Subscription status of this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    /// Confirmation state of this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_status: Option<ConfirmStatus>,
    /// How the address was opted in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_source: Option<ActionBy>,
    /// When the address was opted in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_in_date: Option<DateTime<Utc>>,
    /// When the address was opted out, if it was.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opt_out_date: Option<DateTime<Utc>>,
}

impl EmailAddress {
    /// Creates a bare email address, the minimum needed to create a contact.
    #[must_use]
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            ..Self::default()
        }
    }
}

/// A contact's membership in a contact list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactListRef {
    /// The list id.
    pub id: String,
    /// The contact's status within the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
}

/// A contact record.
///
/// Server-assigned fields (`id`, `status`, dates, `source`) are skipped
/// when serializing a new contact for creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// The canonical server-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Subscription status. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// The contact's email addresses.
    #[serde(default)]
    pub email_addresses: Vec<EmailAddress>,
    /// Contact list memberships.
    #[serde(default)]
    pub lists: Vec<ContactListRef>,
    /// Where the contact came from. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// When the contact was created. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// When the contact was last modified. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_round_trip() {
        let contact = Contact {
            id: Some("238".to_string()),
            status: Some(ContactStatus::Active),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            job_title: None,
            company_name: Some("Analytical Engines".to_string()),
            email_addresses: vec![EmailAddress {
                email_address: "ada@example.com".to_string(),
                status: Some(ContactStatus::Active),
                confirm_status: Some(ConfirmStatus::Confirmed),
                opt_in_source: Some(ActionBy::Visitor),
                opt_in_date: None,
                opt_out_date: None,
            }],
            lists: vec![ContactListRef {
                id: "1".to_string(),
                status: Some(ContactStatus::Active),
            }],
            source: None,
            created_date: None,
            modified_date: None,
        };

        let json = serde_json::to_string(&contact).unwrap();
        let restored: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, contact);
    }

    #[test]
    fn test_new_contact_serializes_without_server_fields() {
        let contact = Contact {
            email_addresses: vec![EmailAddress::new("new@example.com")],
            lists: vec![ContactListRef {
                id: "1".to_string(),
                status: None,
            }],
            ..Contact::default()
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("status").is_none());
        assert!(value.get("created_date").is_none());
        assert_eq!(value["email_addresses"][0]["email_address"], "new@example.com");
    }

    #[test]
    fn test_status_enum_wire_names() {
        let json = serde_json::to_string(&ContactStatus::NonSubscriber).unwrap();
        assert_eq!(json, r#""NON_SUBSCRIBER""#);

        let status: ContactStatus = serde_json::from_str(r#""OPTOUT""#).unwrap();
        assert_eq!(status, ContactStatus::OptOut);
    }

    #[test]
    fn test_action_by_wire_values() {
        assert_eq!(ActionBy::Owner.as_str(), "ACTION_BY_OWNER");
        assert_eq!(ActionBy::Visitor.as_str(), "ACTION_BY_VISITOR");

        let parsed: ActionBy = serde_json::from_str(r#""ACTION_BY_OWNER""#).unwrap();
        assert_eq!(parsed, ActionBy::Owner);
    }

    #[test]
    fn test_contact_decodes_minimal_server_payload() {
        let json = r#"{"id": "900", "email_addresses": []}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id.as_deref(), Some("900"));
        assert!(contact.lists.is_empty());
    }
}
