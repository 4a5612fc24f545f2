use std::time::Duration;

use tracing::{debug, instrument, warn, Span};

use crate::endpoints::Endpoint;
use crate::errors::{Result, UnsplashError};
use crate::request::{HttpMethod, RequestOptions};
use crate::transport::TransportConfig;

/// Blocking counterpart of [`crate::Transport`]. Same headers, same
/// classification, but every call blocks the current thread.
#[derive(Debug)]
pub struct Transport {
    config: TransportConfig,
    http: reqwest::blocking::Client,
}

impl Transport {
    pub(crate) fn new(config: TransportConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
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

    /// Stored, never consulted: requests are not retried.
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries()
    }

    /// Send one request and return the raw response on any 2xx status.
    /// Redirects are not followed, so a 3xx comes back as an API error.
    ///
    /// # Errors
    ///
    /// Same as [`crate::Transport::request`].
    #[instrument(
        name = "unsplash_request",
        skip_all,
        fields(
            http.method = %method,
            http.path = %path,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::blocking::Response> {
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

        let response = req.send()?;
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status.is_success() {
            debug!("request completed");
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response.text()?;
        let err = UnsplashError::from_response_parts(status, &headers, body);
        warn!(error = %err, "request rejected");
        Err(err)
    }

    pub(crate) fn call<T>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let response = self.request(endpoint.method, &endpoint.path, endpoint.options)?;
        let body = response.text()?;
        (endpoint.decode)(&body)
    }
}
