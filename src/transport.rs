//! Async HTTP transport: header injection, dispatch and error
//! classification for every API call.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, instrument, warn, Span};

use crate::endpoints::Endpoint;
use crate::errors::{Result, UnsplashError};
use crate::request::{HttpMethod, RequestOptions};

const ACCEPT_VERSION: &str = "accept-version";
const API_VERSION: &str = "v1";

/// Immutable per-client settings shared by both transports.
///
/// The access key only survives as a pre-built `Authorization` value marked
/// sensitive, so `Debug` output never shows it.
#[derive(Debug, Clone)]
pub(crate) struct TransportConfig {
    base_url: String,
    authorization: HeaderValue,
    timeout: Duration,
    max_retries: u32,
}

/// A request ready to hand to reqwest.
pub(crate) struct Prepared {
    pub url: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl TransportConfig {
    pub(crate) fn new(
        access_key: &str,
        base_url: &str,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self> {
        if access_key.trim().is_empty() {
            return Err(UnsplashError::InvalidConfig(
                "access key must not be empty".into(),
            ));
        }
        let mut authorization = HeaderValue::from_str(&format!("Client-ID {access_key}"))
            .map_err(|_| {
                UnsplashError::InvalidConfig(
                    "access key contains characters not allowed in an HTTP header".into(),
                )
            })?;
        authorization.set_sensitive(true);

        url::Url::parse(base_url)
            .map_err(|e| UnsplashError::InvalidConfig(format!("invalid base URL {base_url:?}: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization,
            timeout,
            max_retries,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Resolve `path` against the base URL and merge the auth headers over
    /// whatever the caller supplied.
    pub(crate) fn prepare(&self, path: &str, options: RequestOptions) -> Result<Prepared> {
        if !path.starts_with('/') {
            return Err(UnsplashError::InvalidRequest(format!(
                "path must start with '/': {path:?}"
            )));
        }
        let (query, body, mut headers) = options.into_parts();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT_VERSION, HeaderValue::from_static(API_VERSION));

        Ok(Prepared {
            url: format!("{}{}", self.base_url, path),
            headers,
            query,
            body,
        })
    }
}

/// Executes requests against the Unsplash API on an async runtime.
///
/// Obtained from [`Client::transport`](crate::Client::transport). The
/// transport holds no mutable state, so concurrent requests through one
/// instance are independent of each other.
#[derive(Debug)]
pub struct Transport {
    config: TransportConfig,
    http: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: TransportConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// The configured retry budget. Requests are never retried; the value
    /// is only stored.
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries()
    }

    /// Send one request and return the raw response on any 2xx status.
    /// Redirects are not followed, so a 3xx comes back as an API error.
    ///
    /// `path` is appended verbatim to the base URL and must start with `/`.
    ///
    /// # Errors
    ///
    /// - [`UnsplashError::InvalidRequest`] if `path` does not start with `/`.
    /// - [`UnsplashError::Http`] if the request fails before a response
    ///   arrives, or the error body cannot be read.
    /// - One of the API variants for any non-2xx status; see
    ///   [`UnsplashError::from_response_parts`].
    #[instrument(
        name = "unsplash_request",
        skip_all,
        fields(
            http.method = %method,
            http.path = %path,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        let prepared = self.config.prepare(path, options)?;

        let mut req = self
            .http
            .request(method.into(), &prepared.url)
            .headers(prepared.headers);
        if !prepared.query.is_empty() {
            req = req.query(&prepared.query);
        }
        if let Some(ref body) = prepared.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status.is_success() {
            debug!("request completed");
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response.text().await?;
        let err = UnsplashError::from_response_parts(status, &headers, body);
        warn!(error = %err, "request rejected");
        Err(err)
    }

    /// Run a facade endpoint: send it, then decode the 2xx body.
    pub(crate) async fn call<T>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let response = self
            .request(endpoint.method, &endpoint.path, endpoint.options)
            .await?;
        let body = response.text().await?;
        (endpoint.decode)(&body)
    }
}
