//! # notion-api
//!
//! Notion API client built on the `notion-client` dispatch layer.
//!
//! ## Features
//!
//! - **Databases** - retrieve, query, list, create, update
//! - **Pages** - create, retrieve, update, property items
//! - **Blocks** - retrieve, update, delete, append and list children
//! - **Users** - retrieve, list, the token's own bot user
//! - **Comments** - create, list
//! - **Search** - title search across shared pages and databases
//!
//! Every operation is a row in [`endpoints`]; call arguments are split into
//! path, query and body parameters from that row and sent as one request.
//!
//! ## Example
//!
//! ```rust,ignore
//! use notionkit_api::{NotionClient, QueryDatabaseParameters};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notionkit_api::Error> {
//!     let client = NotionClient::from_env()?;
//!
//!     let results: serde_json::Value = client
//!         .databases()
//!         .query(&QueryDatabaseParameters {
//!             database_id: "abc123".into(),
//!             filter: Some(serde_json::json!({
//!                 "property": "Status",
//!                 "status": { "equals": "Done" }
//!             })),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("{}", results["results"]);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod params;

pub use client::{
    BlockChildren, Blocks, Comments, Databases, NotionClient, PageProperties, Pages, Users,
};
pub use params::*;

pub use notionkit_client::{
    ClientConfig, ClientConfigBuilder, Endpoint, Error, ErrorKind, LogLevel, Logger,
    RequestMethod, RequestSpec, Result,
};
