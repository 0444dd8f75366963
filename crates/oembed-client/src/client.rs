//! oEmbed HTTP client
//!
//! Builds `GET <endpoint>?url=<url>&format=json` requests and converts every
//! failure mode (transport error, non-success status, malformed JSON) into
//! [`MetadataResult::Unavailable`]. One best-effort attempt per fetch, no
//! retries.

use std::time::Duration;

use async_trait::async_trait;
use preview_core::{MetadataResult, OembedMetadata, Platform};
use reqwest::Client as ReqwestClient;

/// Configuration for the oEmbed client
#[derive(Debug, Clone)]
pub struct OembedClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// When set, every request goes to this endpoint instead of the
    /// platform's own (mock servers, corporate proxies)
    pub endpoint_override: Option<String>,
}

impl Default for OembedClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("MediaLens/{}", env!("CARGO_PKG_VERSION")),
            endpoint_override: None,
        }
    }
}

impl OembedClientConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route every request to a fixed endpoint
    pub fn with_endpoint_override(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }
}

/// Source of oEmbed metadata.
///
/// The seam between the preview orchestrator and the network;
/// [`OembedClient`] is the production implementation.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch metadata for `url` from `platform`'s oEmbed endpoint.
    ///
    /// Always resolves; failures come back as
    /// [`MetadataResult::Unavailable`] with a diagnostic.
    async fn fetch_metadata(&self, url: &str, platform: Platform) -> MetadataResult;
}

/// HTTP client for platform oEmbed endpoints
#[derive(Debug, Clone)]
pub struct OembedClient {
    client: ReqwestClient,
    config: OembedClientConfig,
}

impl OembedClient {
    /// Create a new client from config
    pub fn new(config: OembedClientConfig) -> Self {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Get the client configuration
    pub fn config(&self) -> &OembedClientConfig {
        &self.config
    }

    fn endpoint_for(&self, platform: Platform) -> &str {
        self.config
            .endpoint_override
            .as_deref()
            .unwrap_or_else(|| platform.oembed_endpoint())
    }
}

impl Default for OembedClient {
    fn default() -> Self {
        Self::new(OembedClientConfig::default())
    }
}

#[async_trait]
impl MetadataSource for OembedClient {
    async fn fetch_metadata(&self, url: &str, platform: Platform) -> MetadataResult {
        let endpoint = self.endpoint_for(platform);
        tracing::debug!("Fetching oEmbed metadata from {} for {}", endpoint, url);

        let response = match self
            .client
            .get(endpoint)
            .query(&[("url", url), ("format", "json")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("oEmbed request to {} failed: {}", platform.display_name(), e);
                return MetadataResult::unavailable(format!("Request failed: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("oEmbed endpoint for {} answered {}", platform.display_name(), status);
            return MetadataResult::unavailable(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        match response.json::<OembedMetadata>().await {
            Ok(metadata) => MetadataResult::Available(metadata),
            Err(e) => {
                tracing::warn!(
                    "Failed to decode oEmbed payload from {}: {}",
                    platform.display_name(),
                    e
                );
                MetadataResult::unavailable(format!("Invalid oEmbed payload: {}", e))
            }
        }
    }
}
