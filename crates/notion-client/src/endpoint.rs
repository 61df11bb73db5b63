//! Declarative endpoint descriptors.

use crate::error::{Error, ErrorKind, Result};
use crate::params::{pick, Arguments};
use crate::request::{RequestMethod, RequestSpec};

/// Static description of one API operation.
///
/// `path` is a template such as `databases/{database_id}/query`; every
/// `{name}` is filled from the call argument of the same name.
/// `query_params` and `body_params` must not share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: RequestMethod,
    pub path: &'static str,
    pub query_params: &'static [&'static str],
    pub body_params: &'static [&'static str],
}

impl Endpoint {
    /// Names of the `{placeholders}` in the path template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    names.push(&after[..close]);
                    rest = &after[close + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Substitute path parameters from `args`.
    ///
    /// String and number values are accepted and percent-encoded as a
    /// single path segment. A missing, null or empty value is an error, and
    /// so is `.` or `..`, which URL resolution would collapse.
    pub fn build_path(&self, args: &Arguments) -> Result<String> {
        let mut path = String::with_capacity(self.path.len() + 36);
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let name = &after[..close];
            path.push_str(&rest[..open]);
            path.push_str(&urlencoding::encode(&path_value(args, name)?));
            rest = &after[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    /// Build a full request from flat call arguments and an optional auth
    /// override.
    ///
    /// A partition with no entries becomes `None`, except that a body-taking
    /// endpoint (non-empty `body_params`) always sends an object.
    pub fn request(&self, args: &Arguments, auth: Option<String>) -> Result<RequestSpec> {
        let path = self.build_path(args)?;

        let query = pick(args, self.query_params);
        let body = pick(args, self.body_params);

        Ok(RequestSpec {
            path,
            method: self.method,
            query: (!query.is_empty()).then_some(query),
            body: (!self.body_params.is_empty()).then_some(body),
            auth,
        })
    }
}

fn path_value(args: &Arguments, name: &str) -> Result<String> {
    let missing = || Error::new(ErrorKind::MissingPathParameter(name.to_string()));
    match args.get(name) {
        Some(serde_json::Value::String(s)) if s == "." || s == ".." => {
            Err(Error::new(ErrorKind::InvalidArguments(format!(
                "path parameter {name} must not be a dot segment, got {s:?}"
            ))))
        }
        Some(serde_json::Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::String(_)) | Some(serde_json::Value::Null) | None => Err(missing()),
        Some(other) => Err(Error::new(ErrorKind::InvalidArguments(format!(
            "path parameter {name} must be a string, got {other}"
        )))),
    }
}
