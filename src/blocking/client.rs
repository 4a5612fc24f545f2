use tracing::debug;

use super::resources::{Collections, Photos, Search, Users};
use super::transport::Transport;
use crate::client::ClientBuilder;
use crate::errors::Result;
use crate::transport::TransportConfig;

/// The blocking Unsplash API client.
///
/// Built with [`Client::new`] or [`ClientBuilder::build_blocking`]. There is
/// no explicit teardown; the connection pool goes away with the client.
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with the given access key and default settings.
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().access_key(access_key).build_blocking()
    }

    /// Shorthand for [`ClientBuilder::new`]; finish with
    /// [`build_blocking`](ClientBuilder::build_blocking).
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_config(config: TransportConfig) -> Result<Self> {
        let transport = Transport::new(config)?;
        debug!(base_url = transport.base_url(), "blocking unsplash client ready");
        Ok(Self { transport })
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

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}
