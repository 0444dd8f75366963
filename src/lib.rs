//! MediaLens: social media link preview resolution
//!
//! Given a raw URL string, MediaLens identifies which supported platform it
//! belongs to (YouTube, Instagram, Facebook, TikTok, or Audiomack), fetches
//! descriptive metadata from the platform's oEmbed endpoint, and renders
//! embeddable preview markup with graceful fallbacks when metadata retrieval
//! fails.
//!
//! ```rust,no_run
//! use medialens::PreviewService;
//!
//! # async fn example() -> Result<(), medialens::PreviewError> {
//! let service = PreviewService::new();
//! let preview = service.preview("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//!
//! println!("{} by {}", preview.title, preview.author);
//! println!("{}", preview.embed_html);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::Serialize;

pub use oembed_client::{MetadataSource, OembedClient, OembedClientConfig};
pub use preview_core::{
    extract_media_id, render_embed, CompanionScript, Dimension, MetadataResult, OembedMetadata,
    Platform,
};

/// Errors reported to the caller of [`PreviewService::preview`].
///
/// Metadata-fetch failures are not part of this taxonomy: they degrade the
/// preview instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// The input URL was empty or did not carry an http(s) scheme
    #[error("invalid URL: {0}")]
    Validation(String),

    /// No supported platform matched the URL
    #[error("unsupported platform; use YouTube, Instagram, Facebook, TikTok, or Audiomack links")]
    UnsupportedPlatform,
}

/// Result type for preview operations
pub type Result<T> = std::result::Result<T, PreviewError>;

/// A resolved preview, ready for the caller to present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    /// The matched platform
    pub platform: Platform,

    /// Embed markup: provider-supplied when available, fallback otherwise
    pub embed_html: String,

    /// Display title: metadata title, or the platform name
    pub title: String,

    /// Display author: metadata author, or the platform name
    pub author: String,

    /// Labeled metadata lines; empty when nothing was retrieved
    pub metadata_summary: Vec<String>,

    /// Script the embed markup needs the caller to load: at most one per
    /// preview, replacing any previously loaded companion script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companion_script: Option<CompanionScript>,

    /// Diagnostic from a failed metadata fetch, preserved for callers that
    /// want more than "metadata unavailable"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_error: Option<String>,
}

/// Sequences platform matching, metadata fetching, and embed rendering.
///
/// Every `preview` call is independent and may run concurrently with others;
/// the only shared structure is the static platform registry. Dropping the
/// returned future cancels the in-flight metadata fetch, so a caller racing
/// a new request against an old one simply drops the stale future. Results
/// are returned, never pushed, and cannot touch newer state.
#[derive(Debug, Clone, Default)]
pub struct PreviewService<S = OembedClient> {
    source: S,
}

impl PreviewService {
    /// Create a service backed by a default oEmbed client
    pub fn new() -> Self {
        Self { source: OembedClient::default() }
    }

    /// Create a service with a custom client configuration
    pub fn with_config(config: OembedClientConfig) -> Self {
        Self { source: OembedClient::new(config) }
    }
}

impl<S: MetadataSource> PreviewService<S> {
    /// Create a service over any metadata source
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Resolve a preview for a raw URL string.
    ///
    /// Fails fast with [`PreviewError::Validation`] on empty or
    /// non-http(s) input and [`PreviewError::UnsupportedPlatform`] when no
    /// registry entry matches, in both cases before any network I/O. A
    /// failed metadata fetch still yields `Ok`: the embed falls back to a
    /// local template and the diagnostic is carried in `metadata_error`.
    pub async fn preview(&self, url: &str) -> Result<PreviewResult> {
        let url = url.trim();
        validate_url(url)?;

        let platform = Platform::detect(url).ok_or(PreviewError::UnsupportedPlatform)?;
        tracing::debug!("Matched {} for {}", platform.display_name(), url);

        let metadata = self.source.fetch_metadata(url, platform).await;
        let embed_html = render_embed(url, platform, &metadata);

        let payload = metadata.metadata();
        let title = payload
            .and_then(|m| m.title.clone())
            .unwrap_or_else(|| platform.display_name().to_string());
        let author = payload
            .and_then(|m| m.author_name.clone())
            .unwrap_or_else(|| platform.display_name().to_string());
        let metadata_summary = payload.map(|m| m.summary_lines()).unwrap_or_default();

        Ok(PreviewResult {
            platform,
            embed_html,
            title,
            author,
            metadata_summary,
            companion_script: platform.companion_script(),
            metadata_error: metadata.failure_reason().map(|reason| reason.to_string()),
        })
    }
}

/// Reject empty input and non-http(s) schemes before any network work.
fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(PreviewError::Validation("URL must not be empty".to_string()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(PreviewError::Validation(
            "URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}
