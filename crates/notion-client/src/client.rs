//! Request dispatcher: one HTTP call per `RequestSpec`.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use crate::auth::auth_header;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::logging::{LogLevel, Logger, TracingLogger};
use crate::params::query_pairs;
use crate::request::RequestSpec;

/// HTTP client for the Notion API.
///
/// Cheap to clone; clones share the connection pool, the configuration and
/// the logger. There is no retry: each `dispatch` makes exactly one attempt.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<ClientConfig>,
    api_root: Url,
    logger: Arc<dyn Logger>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("api_root", &self.api_root.as_str())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_root = Url::parse(&config.api_root())?;

        let mut default_headers = HeaderMap::new();
        let version = HeaderValue::from_str(&config.notion_version).map_err(|e| {
            Error::with_source(
                ErrorKind::Config(format!("invalid Notion-Version: {}", config.notion_version)),
                e,
            )
        })?;
        default_headers.insert("notion-version", version);

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(default_headers)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        let logger = config
            .logger
            .clone()
            .unwrap_or_else(|| Arc::new(TracingLogger::default()));

        Ok(Self {
            inner,
            config: Arc::new(config),
            api_root,
            logger,
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for an endpoint path, without query string.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.api_root.join(path.trim_start_matches('/'))?)
    }

    /// Send one request and decode the JSON response.
    ///
    /// Logs `request start` before sending and `request end` once the call
    /// has finished, whether it succeeded or not.
    #[instrument(skip(self, spec), fields(method = %spec.method, path = %spec.path))]
    pub async fn dispatch<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let fields = [
            ("method", spec.method.to_string()),
            ("path", spec.path.clone()),
        ];
        self.log(LogLevel::Info, "request start", &fields);

        let result = self.send::<T>(&spec).await;

        let mut end = fields.to_vec();
        match &result {
            Ok((status, _)) => {
                end.push(("status", status.to_string()));
                end.push(("outcome", "ok".to_string()));
            }
            Err(err) => {
                if let Some(status) = err.status() {
                    end.push(("status", status.to_string()));
                }
                end.push(("outcome", "error".to_string()));
                end.push(("error", err.label().to_string()));
            }
        }
        self.log(LogLevel::Info, "request end", &end);

        result.map(|(_, value)| value)
    }

    async fn send<T: DeserializeOwned>(&self, spec: &RequestSpec) -> Result<(u16, T)> {
        let mut url = self.url(&spec.path)?;
        if let Some(ref query) = spec.query {
            let pairs = query_pairs(query);
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        let headers = auth_header(spec.auth.as_deref(), self.config.auth.as_deref())?;

        let mut req = self
            .inner
            .request(spec.method.to_reqwest(), url)
            .headers(headers);

        if let Some(ref body) = spec.body {
            req = req.json(body);
        }

        let exchange = async {
            let response = req.send().await?;
            let status = response.status().as_u16();
            let text = response.text().await?;
            Ok::<_, Error>((status, text))
        };

        let (status, text) = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| Error::new(ErrorKind::Timeout))??;

        if !(200..300).contains(&status) {
            return Err(error_from_response(status, text));
        }

        let value = serde_json::from_str(&text)?;
        Ok((status, value))
    }

    fn log(&self, level: LogLevel, message: &str, fields: &[(&'static str, String)]) {
        if self.config.log_level.allows(level) {
            self.logger.log(level, message, fields);
        }
    }
}

/// Classify a non-2xx response.
fn error_from_response(status: u16, body: String) -> Error {
    if let Ok(serde_json::Value::Object(obj)) = serde_json::from_str(&body) {
        let is_error = obj.get("object").and_then(|v| v.as_str()) == Some("error");
        if let (true, Some(code)) = (is_error, obj.get("code").and_then(|v| v.as_str())) {
            let code = code.to_string();
            let message = obj
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            return Error::new(ErrorKind::Api {
                status,
                code,
                message,
                body,
            });
        }
    }

    Error::new(ErrorKind::Http { status, body })
}
