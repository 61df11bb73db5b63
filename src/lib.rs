//! # notionkit
//!
//! A Notion API client library for Rust.
//!
//! Each API operation is a declarative endpoint descriptor (method, path
//! template, query and body parameter names). A call serializes its
//! arguments, routes them to path, query or body, resolves the bearer token
//! and sends exactly one request.
//!
//! ## Security
//!
//! - Tokens are redacted in Debug output of configs and requests
//! - The authorization header is marked sensitive
//! - Tracing spans skip call arguments
//!
//! ## Crates
//!
//! - **notionkit-client** - Dispatch layer: endpoint descriptors, parameter partitioning, auth, logging
//! - **notionkit-api** - Resource groups: databases, pages, blocks, users, comments, search
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notionkit::{NotionClient, RetrieveDatabaseParameters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NotionClient::from_env()?;
//!
//!     let db: serde_json::Value = client
//!         .databases()
//!         .retrieve(&RetrieveDatabaseParameters {
//!             database_id: "abc123".into(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("{}", db["title"]);
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "api")]
pub use notionkit_api as api;
#[cfg(feature = "client")]
pub use notionkit_client as client;

// Re-export commonly used types at the top level
#[cfg(feature = "api")]
pub use notionkit_api::*;
#[cfg(feature = "client")]
pub use notionkit_client::{ClientConfig, Error, ErrorKind, LogLevel, Logger, Result};
