//! Bearer token resolution.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{Error, ErrorKind, Result};

/// Pick the token for a call: the per-call override wins over the client
/// default.
pub fn resolve_token<'a>(per_call: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
    per_call.or(default)
}

/// Build the authorization header map for a call.
///
/// Returns an empty map when neither token is set; the request then goes out
/// unauthenticated and any 401 surfaces as an ordinary API error.
pub fn auth_header(per_call: Option<&str>, default: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(token) = resolve_token(per_call, default) {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            Error::with_source(
                ErrorKind::Config("auth token is not a valid header value".to_string()),
                e,
            )
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
