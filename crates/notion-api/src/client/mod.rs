//! Notion API client.
//!
//! This client wraps `HttpClient` from `notion-client` and exposes one
//! accessor per API resource. Every operation goes through the same three
//! steps: build a `RequestSpec` from the endpoint table, then dispatch it.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use notionkit_client::{
    to_arguments, ClientConfig, Endpoint, Error, ErrorKind, HttpClient, RequestSpec, Result,
};

mod blocks;
mod comments;
mod databases;
mod pages;
mod search;
mod users;

pub use blocks::{BlockChildren, Blocks};
pub use comments::Comments;
pub use databases::Databases;
pub use pages::{PageProperties, Pages};
pub use users::Users;

/// Notion API client.
///
/// Resource groups mirror the REST API:
/// - `databases()` - retrieve, query, list, create, update
/// - `pages()` - create, retrieve, update, `properties().retrieve`
/// - `blocks()` - retrieve, update, delete, `children().append` / `list`
/// - `users()` - retrieve, list, me
/// - `comments()` - create, list
/// - `search()`
///
/// Responses come back as whatever `DeserializeOwned` type the caller asks
/// for; `serde_json::Value` works for everything.
///
/// # Example
///
/// ```rust,ignore
/// use notionkit_api::{NotionClient, RetrieveDatabaseParameters};
///
/// let client = NotionClient::with_auth("secret_xxx")?;
///
/// let db: serde_json::Value = client
///     .databases()
///     .retrieve(&RetrieveDatabaseParameters {
///         database_id: "abc123".into(),
///         ..Default::default()
///     })
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: HttpClient,
}

impl NotionClient {
    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client with default configuration and the given token.
    pub fn with_auth(token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::builder().with_auth(token).build())
    }

    /// Create a client configured from `NOTION_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client from an existing HttpClient.
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the underlying HttpClient.
    pub fn inner(&self) -> &HttpClient {
        &self.http
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages { client: self }
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    /// Send an arbitrary request. Use this for endpoints the client does not
    /// cover yet.
    pub async fn request<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        self.http.dispatch(spec).await
    }

    /// Resolve call arguments against an endpoint without sending anything.
    ///
    /// The `auth` argument becomes the per-call token; every other argument
    /// is routed to the path, query or body as the endpoint declares.
    pub fn build_request<P: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        params: &P,
    ) -> Result<RequestSpec> {
        let mut args = to_arguments(params)?;
        let auth = match args.remove("auth") {
            None | Some(Value::Null) => None,
            Some(Value::String(token)) => Some(token),
            Some(other) => {
                return Err(Error::new(ErrorKind::InvalidArguments(format!(
                    "auth must be a string, got {other}"
                ))))
            }
        };
        endpoint.request(&args, auth)
    }

    /// Build and send a request for `endpoint`.
    pub async fn call<P, T>(&self, endpoint: &Endpoint, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let spec = self.build_request(endpoint, params)?;
        self.request(spec).await
    }
}
