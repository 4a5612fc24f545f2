//! Plain-data description of a single API request.
//!
//! These types are shared by the async and the blocking transport so that
//! both send exactly the same thing for the same call.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use strum::Display;

/// HTTP methods accepted by [`Transport::request`](crate::Transport::request).
///
/// The resource facades only ever issue `GET`; the others exist for callers
/// that reach endpoints directly through the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Query parameters, JSON body and extra headers for one request.
///
/// Query values are rendered with `ToString`, so numbers and booleans come
/// out as `10` and `true`.
///
/// ```
/// use unsplash::RequestOptions;
///
/// let opts = RequestOptions::new()
///     .query("page", 2)
///     .query("stats", false)
///     .query_opt("orientation", None::<&str>);
/// assert_eq!(
///     opts.query_pairs(),
///     &[
///         ("page".to_string(), "2".to_string()),
///         ("stats".to_string(), "false".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is `Some`.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Send `body` as the JSON request body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a request header. `Authorization` and `Accept-Version` are always
    /// overwritten by the transport.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn into_parts(self) -> (Vec<(String, String)>, Option<serde_json::Value>, HeaderMap) {
        (self.query, self.body, self.headers)
    }
}
