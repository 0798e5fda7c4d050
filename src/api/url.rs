//! Request URL building for API endpoints.
//!
//! Every endpoint method follows the same shape: a fixed template with
//! `{name}` placeholders, a set of path parameter values, and an ordered
//! list of optional query parameters. [`build_url`] turns those into the
//! request path handed to the transport.
//!
//! Pagination is the exception: the server returns an opaque next link that
//! is itself a complete request path. [`next_link_path`] passes it through
//! verbatim — next links are never parsed or reconstructed client-side.
//!
//! # Example
//!
//! ```rust
//! use constant_contact_api::api::build_url;
//!
//! let url = build_url(
//!     "v2/emailmarketing/campaigns/{campaignId}/tracking/bounces",
//!     &[("campaignId", "1100394165290")],
//!     &[
//!         ("created_since", Some("2024-01-01T00:00:00Z".to_string())),
//!         ("limit", Some("50".to_string())),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     url,
//!     "v2/emailmarketing/campaigns/1100394165290/tracking/bounces?created_since=2024-01-01T00%3A00%3A00Z&limit=50"
//! );
//! ```

use thiserror::Error;

/// Errors produced while building a request URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// A template placeholder had no corresponding path parameter value.
    #[error("no value supplied for path placeholder '{{{placeholder}}}'")]
    MissingPathParam {
        /// The placeholder name, without braces.
        placeholder: String,
    },
}

/// Builds a request path from an endpoint template.
///
/// Substitutes each `{name}` placeholder with the matching value from
/// `path_params` (percent-encoded), then appends every present query
/// parameter in slice order. Services pass filter parameters first and
/// `limit` last; the ordering is not required by the server but keeps
/// generated URLs deterministic. `None` query values are omitted entirely.
///
/// # Errors
///
/// Returns [`UrlError::MissingPathParam`] if a placeholder in the template
/// has no supplied value.
pub fn build_url(
    template: &str,
    path_params: &[(&str, &str)],
    query_params: &[(&str, Option<String>)],
) -> Result<String, UrlError> {
    let mut path = template.to_string();

    for (name, value) in path_params {
        let placeholder = format!("{{{name}}}");
        path = path.replace(&placeholder, &urlencoding::encode(value));
    }

    if let Some(placeholder) = unresolved_placeholder(&path) {
        return Err(UrlError::MissingPathParam { placeholder });
    }

    let mut separator = if path.contains('?') { '&' } else { '?' };
    for (name, value) in query_params {
        if let Some(value) = value {
            path.push(separator);
            path.push_str(name);
            path.push('=');
            path.push_str(&urlencoding::encode(value));
            separator = '&';
        }
    }

    Ok(path)
}

/// Returns the verbatim request path for a server-issued next link.
///
/// The link is opaque: whatever the server returned in the previous page's
/// pagination metadata is used as-is, modulo a leading slash the transport
/// strips anyway.
#[must_use]
pub fn next_link_path(next_link: &str) -> String {
    next_link.trim_start_matches('/').to_string()
}

/// Finds the first unsubstituted `{name}` placeholder, if any.
fn unresolved_placeholder(path: &str) -> Option<String> {
    let start = path.find('{')?;
    let end = path[start..].find('}')?;
    Some(path[start + 1..start + end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_substitutes_single_placeholder() {
        let url = build_url(
            "v2/contacts/{contactId}/tracking/bounces",
            &[("contactId", "238")],
            &[],
        )
        .unwrap();
        assert_eq!(url, "v2/contacts/238/tracking/bounces");
    }

    #[test]
    fn test_build_url_substitutes_multiple_placeholders() {
        let url = build_url(
            "v2/emailmarketing/campaigns/{campaignId}/tracking/clicks/{linkId}",
            &[("campaignId", "1100394165290"), ("linkId", "3")],
            &[],
        )
        .unwrap();
        assert_eq!(
            url,
            "v2/emailmarketing/campaigns/1100394165290/tracking/clicks/3"
        );
    }

    #[test]
    fn test_build_url_percent_encodes_path_values() {
        let url = build_url("v2/contacts/{contactId}", &[("contactId", "a b/c")], &[]).unwrap();
        assert_eq!(url, "v2/contacts/a%20b%2Fc");
    }

    #[test]
    fn test_build_url_fails_on_missing_path_param() {
        let result = build_url(
            "v2/emailmarketing/campaigns/{campaignId}/tracking/bounces",
            &[],
            &[],
        );

        assert!(matches!(
            result,
            Err(UrlError::MissingPathParam { placeholder }) if placeholder == "campaignId"
        ));
    }

    #[test]
    fn test_build_url_appends_query_params_in_order() {
        let url = build_url(
            "v2/contacts",
            &[],
            &[
                ("email", Some("a@example.com".to_string())),
                ("modified_since", Some("2024-01-01T00:00:00Z".to_string())),
                ("limit", Some("50".to_string())),
            ],
        )
        .unwrap();
        assert_eq!(
            url,
            "v2/contacts?email=a%40example.com&modified_since=2024-01-01T00%3A00%3A00Z&limit=50"
        );
    }

    #[test]
    fn test_build_url_omits_absent_query_params() {
        let url = build_url(
            "v2/contacts",
            &[],
            &[
                ("email", None),
                ("modified_since", None),
                ("limit", Some("25".to_string())),
            ],
        )
        .unwrap();
        assert_eq!(url, "v2/contacts?limit=25");
    }

    #[test]
    fn test_build_url_extends_existing_query_string() {
        let url = build_url(
            "v2/emailmarketing/campaigns/{campaignId}/tracking/reports/summary?updateSummary=true",
            &[("campaignId", "42")],
            &[("created_since", Some("2024-06-01T00:00:00Z".to_string()))],
        )
        .unwrap();
        assert_eq!(
            url,
            "v2/emailmarketing/campaigns/42/tracking/reports/summary?updateSummary=true&created_since=2024-06-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_build_url_no_query_params_leaves_path_untouched() {
        let url = build_url("v2/account/info", &[], &[("limit", None)]).unwrap();
        assert_eq!(url, "v2/account/info");
    }

    #[test]
    fn test_next_link_path_is_verbatim() {
        assert_eq!(
            next_link_path("/v2/contacts?next=b64-token&limit=50"),
            "v2/contacts?next=b64-token&limit=50"
        );
        assert_eq!(next_link_path("v2/contacts?next=t"), "v2/contacts?next=t");
    }
}
