//! Generic paged response envelopes.
//!
//! The Constant Contact API wraps list responses in one of two envelopes,
//! depending on the endpoint family. Both hold a `results` sequence plus
//! pagination metadata containing an opaque next link, but the metadata
//! field names differ and the families are not interchangeable:
//!
//! - [`Paged<T>`] — campaign tracking, contacts, and campaigns endpoints;
//!   the link lives at `meta.pagination.next_link`.
//! - [`ResultSet<T>`] — contact tracking endpoints; the link lives at
//!   `meta.pagination.next`.
//!
//! The next link is a complete server-issued request path. Hand it to the
//! matching `*_page` service method verbatim; never construct or edit one.
//!
//! # Example
//!
//! ```rust
//! use constant_contact_api::api::Paged;
//!
//! let json = r#"{
//!     "meta": {"pagination": {"next_link": "/v2/contacts?next=token"}},
//!     "results": [{"id": "1"}]
//! }"#;
//!
//! let page: Paged<serde_json::Value> = serde_json::from_str(json).unwrap();
//! assert!(page.has_next_page());
//! assert_eq!(page.next_link(), Some("/v2/contacts?next=token"));
//! ```

use serde::{Deserialize, Serialize};

/// A page of results from a `Paged` endpoint family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    /// Pagination metadata.
    #[serde(default)]
    pub meta: PagedMeta,
    /// The resources on this page, in server order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Metadata wrapper of a [`Paged`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedMeta {
    /// Pagination block.
    #[serde(default)]
    pub pagination: PagedPagination,
}

/// Pagination block of a [`Paged`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedPagination {
    /// Opaque path of the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl<T> Paged<T> {
    /// Returns the opaque next-link path, if there is a further page.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.meta.pagination.next_link.as_deref()
    }

    /// Returns `true` if the server reported a further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.meta.pagination.next_link.is_some()
    }

    /// Consumes the envelope and returns the results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

/// A page of results from a `ResultSet` endpoint family.
///
/// Structurally analogous to [`Paged`] but deliberately a distinct type:
/// the contact tracking endpoints use different metadata field names, and
/// keeping the envelopes separate means a caller cannot feed one family's
/// next link to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet<T> {
    /// Pagination metadata.
    #[serde(default)]
    pub meta: ResultSetMeta,
    /// The resources on this page, in server order.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Metadata wrapper of a [`ResultSet`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSetMeta {
    /// Pagination block.
    #[serde(default)]
    pub pagination: ResultSetPagination,
}

/// Pagination block of a [`ResultSet`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSetPagination {
    /// Opaque path of the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> ResultSet<T> {
    /// Returns the opaque next-link path, if there is a further page.
    #[must_use]
    pub fn next_link(&self) -> Option<&str> {
        self.meta.pagination.next.as_deref()
    }

    /// Returns `true` if the server reported a further page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.meta.pagination.next.is_some()
    }

    /// Consumes the envelope and returns the results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_decodes_results_and_next_link() {
        let json = r#"{
            "meta": {"pagination": {"next_link": "/v2/emailmarketing/campaigns?next=abc"}},
            "results": [{"name": "one"}, {"name": "two"}]
        }"#;

        let page: Paged<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.has_next_page());
        assert_eq!(
            page.next_link(),
            Some("/v2/emailmarketing/campaigns?next=abc")
        );
    }

    #[test]
    fn test_paged_last_page_has_no_next_link() {
        let json = r#"{"meta": {"pagination": {}}, "results": []}"#;

        let page: Paged<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!page.has_next_page());
        assert!(page.next_link().is_none());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_paged_tolerates_missing_meta() {
        let json = r#"{"results": [{"id": 1}]}"#;

        let page: Paged<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!page.has_next_page());
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn test_result_set_uses_its_own_metadata_field() {
        let json = r#"{
            "meta": {"pagination": {"next": "/v2/contacts/1/tracking/clicks?next=xyz"}},
            "results": [{"link_id": "3"}]
        }"#;

        let set: ResultSet<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(
            set.next_link(),
            Some("/v2/contacts/1/tracking/clicks?next=xyz")
        );

        // The Paged envelope does not recognize the ResultSet field name.
        let page: Paged<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(page.next_link().is_none());
    }

    #[test]
    fn test_into_results_takes_ownership() {
        let set: ResultSet<u32> = ResultSet {
            meta: ResultSetMeta::default(),
            results: vec![1, 2, 3],
        };
        assert_eq!(set.into_results(), vec![1, 2, 3]);
    }

    #[test]
    fn test_paged_round_trip() {
        let page = Paged {
            meta: PagedMeta {
                pagination: PagedPagination {
                    next_link: Some("/v2/contacts?next=t".to_string()),
                },
            },
            results: vec![serde_json::json!({"id": "1"})],
        };

        let json = serde_json::to_string(&page).unwrap();
        let restored: Paged<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, page);
    }
}
