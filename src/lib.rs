//! # Constant Contact API Rust SDK
//!
//! A Rust SDK for the Constant Contact v2 API, providing type-safe
//! configuration, typed resource models, and service façades for the
//! contacts, email campaigns, tracking, and account endpoint families.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CcConfig`] and [`CcConfigBuilder`]
//! - Validated newtypes for API credentials and the API host
//! - Resource models mirroring the API's JSON, including the
//!   `activity_type`-tagged tracking report union
//! - Opaque next-link pagination through the [`api::Paged`] and
//!   [`api::ResultSet`] envelopes
//! - One service type per resource family, each surfacing a single
//!   [`ServiceError`] for every failure mode
//!
//! ## Quick Start
//!
//! ```rust
//! use constant_contact_api::{ApiClient, CcConfig, ApiKey, AccessToken};
//! use constant_contact_api::services::CampaignTrackingService;
//!
//! let config = CcConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ApiClient::new(&config);
//! let tracking = CampaignTrackingService::new(client);
//! ```
//!
//! ## Fetching tracking reports
//!
//! ```rust,ignore
//! // First page, filtered and sized explicitly.
//! let page = tracking
//!     .bounces("1100394165290", Some(since), Some(250))
//!     .await?;
//!
//! // Every further page comes from the opaque next link the server
//! // returned; never construct one yourself.
//! if let Some(link) = page.next_link() {
//!     let second = tracking.bounces_page(link).await?;
//!     println!("{} more bounces", second.results.len());
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every service method returns `Result<_, ServiceError>`. Validation
//! problems fail before the network is touched; transport failures, non-2xx
//! responses, and schema mismatches are wrapped with the request URL
//! attached:
//!
//! ```rust,ignore
//! use constant_contact_api::ServiceError;
//!
//! match contacts.contact("238").await {
//!     Ok(contact) => println!("{:?}", contact.first_name),
//!     Err(ServiceError::Api(e)) if e.status == 404 => println!("no such contact"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and service arguments validate before any I/O
//! - **Thread-safe**: All types are `Send + Sync`; services clone cheaply
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No hidden retries**: One network call per operation; retry policy is the caller's

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod services;

// Re-export public types at crate root for convenience
pub use api::{ApiClient, ApiError, InvalidArgumentError, Paged, ResultSet, ServiceError};
pub use clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};
pub use config::{AccessToken, ApiKey, BaseUrl, CcConfig, CcConfigBuilder};
pub use error::ConfigError;
