//! Error types for notion-client.

/// Result type alias for notion-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for notion-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the request exceeded the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Returns true if the server answered with a Notion error object.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// HTTP status code, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Http { status, .. } | ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Notion error code (e.g. `object_not_found`), if present.
    pub fn code(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    /// Raw response body, if the error came from a response.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Http { body, .. } | ErrorKind::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Short label used in log fields.
    pub(crate) fn label(&self) -> &'static str {
        match self.kind {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Connection(_) => "connection",
            ErrorKind::Http { .. } => "http",
            ErrorKind::Api { .. } => "api",
            ErrorKind::Json(_) => "json",
            ErrorKind::MissingPathParameter(_) => "missing_path_parameter",
            ErrorKind::InvalidArguments(_) => "invalid_arguments",
            ErrorKind::Config(_) => "config",
            ErrorKind::Other(_) => "other",
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Non-2xx response whose body is not a Notion error object.
    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },

    /// Notion API error response. `body` is the raw error object, which
    /// also carries `request_id` and any `additional_data`.
    #[error("Notion API error: {status} {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        body: String,
    },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// A `{name}` in the path template had no value in the call arguments.
    #[error("Missing path parameter: {0}")]
    MissingPathParameter(String),

    /// Call arguments did not serialize to a JSON object.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else if let Some(status) = err.status() {
            ErrorKind::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
