//! Transport abstraction for file transfers.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::Client;

use crate::error::{Error, Result};

/// Connection establishment timeout per transfer.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Inactivity timeout while reading a response body.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// A stream of response body chunks.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Network seam for the download engine.
///
/// Implementations must return an error for non-success statuses rather than
/// handing back an error-page body. Tests substitute instrumented fakes to
/// observe concurrency and inject failures.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the resource at `url`, returning a stream of body chunks.
    async fn fetch(&self, url: &str) -> Result<ByteStream>;
}

/// Production transport backed by reqwest.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with connect/read timeouts and the crate user agent.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("party-downloader/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<ByteStream> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("HTTP {} for {}", status, url)));
        }

        let stream = response.bytes_stream().map(|chunk| chunk.map_err(Error::from));
        Ok(stream.boxed())
    }
}
