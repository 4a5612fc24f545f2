use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::errors::{Result, UnsplashError};
use crate::resources::{Collections, Photos, Search, Users};
use crate::transport::{Transport, TransportConfig};

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for constructing a [`Client`] (or a
/// [`blocking::Client`](crate::blocking::Client)) with custom configuration.
///
/// # Example
///
/// ```no_run
/// use unsplash::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> unsplash::Result<()> {
/// let client = ClientBuilder::new()
///     .access_key("your-access-key")
///     .base_url("https://api.unsplash.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientBuilder {
    access_key: Option<String>,
    base_url: String,
    max_retries: u32,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            access_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the application's access key (sent as `Client-ID <key>`).
    pub fn access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api.unsplash.com`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Stored for forward compatibility. Requests are never retried
    /// regardless of this value (defaults to 3).
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    /// Set the per-request timeout (defaults to 30 seconds).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    pub(crate) fn into_config(self) -> Result<TransportConfig> {
        let access_key = self.access_key.ok_or_else(|| {
            UnsplashError::InvalidConfig(
                "access key is required. Pass it to ClientBuilder::access_key()".into(),
            )
        })?;
        TransportConfig::new(&access_key, &self.base_url, self.timeout, self.max_retries)
    }

    /// Build the async [`Client`].
    ///
    /// # Errors
    ///
    /// [`UnsplashError::InvalidConfig`] if no access key was set, the key
    /// cannot be sent as a header, or the base URL does not parse.
    pub fn build(self) -> Result<Client> {
        let transport = Transport::new(self.into_config()?)?;
        debug!(base_url = transport.base_url(), "unsplash client ready");
        Ok(Client { transport })
    }

    /// Build the blocking [`Client`](crate::blocking::Client).
    ///
    /// Must not be called from inside an async runtime.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::Client> {
        crate::blocking::Client::from_config(self.into_config()?)
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("access_key", &self.access_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The async Unsplash API client.
///
/// Owns one [`Transport`]; the facades returned by [`photos`](Self::photos),
/// [`users`](Self::users), [`collections`](Self::collections) and
/// [`search`](Self::search) all borrow it.
///
/// The underlying connection pool is released exactly once: either
/// explicitly through [`close`](Self::close), or when the client is dropped,
/// which also covers early returns and panics.
///
/// # Example
///
/// ```no_run
/// use unsplash::Client;
///
/// # async fn example() -> unsplash::Result<()> {
/// let client = Client::new("your-access-key")?;
///
/// let photo = client.photos().get("Dwu85P9SOIk").await?;
/// println!("{} by {}", photo.id, photo.user.name);
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with the given access key and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().access_key(access_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn photos(&self) -> Photos<'_> {
        Photos::new(&self.transport)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.transport)
    }

    pub fn collections(&self) -> Collections<'_> {
        Collections::new(&self.transport)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(&self.transport)
    }

    /// Direct access to the transport for endpoints the facades don't cover.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Release the connection pool. Consumes the client, so it can only
    /// happen once.
    pub fn close(self) {
        debug!(base_url = self.transport.base_url(), "closing unsplash client");
        drop(self.transport);
    }
}
