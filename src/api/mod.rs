//! Generic request, pagination, and error-mapping infrastructure.
//!
//! This module is the mechanism every endpoint binding follows; the
//! services in [`crate::services`] are mechanical instantiations of it.
//!
//! - **[`build_url`]**: endpoint template + path params + ordered optional
//!   query params → request path ([`UrlError`] on a missing placeholder)
//! - **[`ApiClient`]**: one HTTP call, error classification, JSON decode
//! - **[`ApiError`]**: typed non-2xx responses with structured detail
//! - **[`ServiceError`]**: the single error type every service surfaces
//! - **[`Paged`] / [`ResultSet`]**: the two pagination envelope families,
//!   each carrying an opaque server-issued next link

mod client;
mod errors;
mod paging;
mod url;

pub use client::ApiClient;
pub use errors::{
    ApiError, ErrorDetail, InvalidArgumentError, ServiceError, LIMIT_MAX, LIMIT_MIN,
};
pub use paging::{Paged, PagedMeta, PagedPagination, ResultSet, ResultSetMeta, ResultSetPagination};
pub use url::{build_url, next_link_path, UrlError};

pub(crate) use errors::{require_non_empty, validate_limit};
