//! Resolved request description handed to the dispatcher.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::params::{to_arguments, Arguments};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully resolved request: built per call, consumed by a single
/// dispatch.
///
/// `path` is relative to the versioned API root (e.g. `databases/abc123`).
/// A `None` body means no request body is sent at all.
#[derive(Clone, PartialEq)]
pub struct RequestSpec {
    pub path: String,
    pub method: RequestMethod,
    pub query: Option<Arguments>,
    pub body: Option<Arguments>,
    /// Per-call token override; falls back to the client default.
    pub auth: Option<String>,
}

impl fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("path", &self.path)
            .field("method", &self.method)
            .field("query", &self.query)
            .field("body", &self.body)
            .field("auth", &self.auth.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl RequestSpec {
    /// Create a request with no query, body or auth override.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            query: None,
            body: None,
            auth: None,
        }
    }

    /// Set the per-call token override.
    pub fn auth(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(token.into());
        self
    }

    /// Set the query parameters from any value that serializes to an object.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        self.query = Some(to_arguments(query)?);
        Ok(self)
    }

    /// Set the JSON body from any value that serializes to an object.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(to_arguments(body)?);
        Ok(self)
    }
}
