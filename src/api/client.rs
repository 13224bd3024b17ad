//! Party catalog API HTTP client.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::api::types::{CreatorRecord, PostRecord, PostsResponse};
use crate::error::{Error, Result};

/// Connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Inactivity timeout while reading a response body.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the party catalog API (coomer.su / kemono.su style archives).
pub struct PartyClient {
    client: Client,
    base: String,
}

impl PartyClient {
    /// Create a client for the given base URL, e.g. `https://coomer.su`.
    /// Trailing slashes are tolerated.
    pub fn new(base_url: &str) -> Result<Self> {
        // Validate early so a bad base URL fails before any request.
        Url::parse(base_url)?;

        let client = Client::builder()
            .user_agent(concat!("party-downloader/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get all posts of the given creator.
    ///
    /// `service` is the creator's platform, e.g. `fansly`, `onlyfans`,
    /// `patreon`. Both inputs are validated non-blank before any request.
    pub async fn posts_for_user(&self, service: &str, creator_id: &str) -> Result<Vec<PostRecord>> {
        require_non_blank(service, "service")?;
        require_non_blank(creator_id, "creator")?;

        self.query_posts(&format!("{}/user/{}", service, creator_id))
            .await
    }

    /// Get all posts referencing a file with the given SHA-256 hash.
    pub async fn posts_by_hash(&self, file_hash: &str) -> Result<Vec<PostRecord>> {
        require_non_blank(file_hash, "file hash")?;

        self.query_posts(&format!("search_hash/{}", file_hash)).await
    }

    /// Fetch the full creators index.
    pub async fn creators(&self) -> Result<Vec<CreatorRecord>> {
        let url = format!("{}/api/v1/creators.txt", self.base);
        let body = self.get_success(&url).await?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("invalid creators response: {}", e)))
    }

    /// The download URL for a server-relative file path.
    pub fn download_url(&self, path: &str) -> String {
        format!("{}/data/{}", self.base, path.trim_start_matches('/'))
    }

    /// Execute a query against an endpoint returning a `posts` array.
    async fn query_posts(&self, endpoint: &str) -> Result<Vec<PostRecord>> {
        let url = format!("{}/api/v1/{}", self.base, endpoint);
        let body = self.get_success(&url).await?;

        let parsed: PostsResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("invalid catalog response: {}", e)))?;

        Ok(parsed.posts)
    }

    /// GET a URL, requiring a success status, and return the body text.
    async fn get_success(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("{} returned HTTP {}", url, status)));
        }

        Ok(response.text().await?)
    }
}

fn require_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("{} must not be blank", field)));
    }
    Ok(())
}
