//! Client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};
use crate::logging::{LogLevel, Logger};

/// Configuration for the HTTP client.
///
/// Built once and moved into the client; it is not changed afterwards.
#[derive(Clone)]
pub struct ClientConfig {
    /// Default bearer token, used when a call does not override it.
    pub auth: Option<String>,
    /// Minimum severity that reaches the logger.
    pub log_level: LogLevel,
    /// API origin, without the versioned path prefix.
    pub base_url: String,
    /// Bound on the whole request, from connect to end of body.
    pub timeout: Duration,
    /// `Notion-Version` header value.
    pub notion_version: String,
    /// User-Agent header value.
    pub user_agent: String,
    /// Log sink; `None` uses [`crate::TracingLogger`].
    pub logger: Option<Arc<dyn Logger>>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth", &self.auth.as_ref().map(|_| "[REDACTED]"))
            .field("log_level", &self.log_level)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("notion_version", &self.notion_version)
            .field("user_agent", &self.user_agent)
            .field("logger", &self.logger.as_ref().map(|_| "custom"))
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth: None,
            log_level: LogLevel::Warn,
            base_url: crate::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(crate::DEFAULT_TIMEOUT_MS),
            notion_version: crate::DEFAULT_NOTION_VERSION.to_string(),
            user_agent: crate::USER_AGENT.to_string(),
            logger: None,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment.
    ///
    /// Reads `NOTION_TOKEN`, `NOTION_BASE_URL`, `NOTION_LOG_LEVEL` and
    /// `NOTION_TIMEOUT_MS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(token) = lookup("NOTION_TOKEN").filter(|t| !t.is_empty()) {
            builder = builder.with_auth(token);
        }
        if let Some(url) = lookup("NOTION_BASE_URL").filter(|u| !u.is_empty()) {
            builder = builder.with_base_url(url);
        }
        if let Some(level) = lookup("NOTION_LOG_LEVEL") {
            builder = builder.with_log_level(level.parse()?);
        }
        if let Some(ms) = lookup("NOTION_TIMEOUT_MS") {
            let ms = ms.trim().parse::<u64>().map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("NOTION_TIMEOUT_MS is not a number: {ms}")),
                    e,
                )
            })?;
            builder = builder.with_timeout(Duration::from_millis(ms));
        }

        Ok(builder.build())
    }

    /// Root that endpoint paths are appended to: base URL plus `/v1/`.
    pub fn api_root(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            crate::API_PATH_PREFIX
        )
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the default bearer token.
    pub fn with_auth(mut self, token: impl Into<String>) -> Self {
        self.config.auth = Some(token.into());
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    /// Set the API origin (e.g. a mock server URL).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the `Notion-Version` header value.
    pub fn with_notion_version(mut self, version: impl Into<String>) -> Self {
        self.config.notion_version = version.into();
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Route log lines to a custom sink.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = Some(logger);
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
