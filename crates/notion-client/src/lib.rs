//! # notion-client
//!
//! Core HTTP dispatch layer for the Notion API.
//!
//! This crate provides the generic machinery every API operation goes through:
//! - Declarative endpoint descriptors (method, path template, parameter keys)
//! - Partitioning of flat call arguments into query and body parameters
//! - Bearer token resolution with per-call override
//! - A single dispatcher that sends one request and decodes the JSON response
//! - Pluggable, level-filtered logging (defaults to `tracing`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (notion-api: databases, pages, blocks, users, ...)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Endpoint + params + auth                       │
//! │  - Path templating from call arguments                      │
//! │  - Query / body partitioning                                │
//! │  - Token override resolution                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - One HTTP call per RequestSpec, no retry                  │
//! │  - Timeout, headers, JSON decoding                          │
//! │  - request start / request end log events                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use notionkit_client::{ClientConfig, HttpClient, RequestMethod, RequestSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notionkit_client::Error> {
//!     let config = ClientConfig::builder().with_auth("secret_xxx").build();
//!     let http = HttpClient::new(config)?;
//!
//!     let me: serde_json::Value = http
//!         .dispatch(RequestSpec::new(RequestMethod::Get, "users/me"))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod endpoint;
mod error;
mod logging;
mod params;
mod request;

pub use auth::{auth_header, resolve_token};
pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::Endpoint;
pub use error::{Error, ErrorKind, Result};
pub use logging::{LogFields, LogLevel, Logger, TracingLogger};
pub use params::{pick, query_pairs, to_arguments, Arguments};
pub use request::{RequestMethod, RequestSpec};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Versioned path prefix appended to the base URL.
pub const API_PATH_PREFIX: &str = "/v1/";

/// Value sent in the `Notion-Version` header unless overridden.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Identifier used as the logger prefix and user agent name.
pub const CLIENT_NAME: &str = "notionkit";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("notionkit/", env!("CARGO_PKG_VERSION"));
