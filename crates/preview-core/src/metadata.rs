//! oEmbed metadata model
//!
//! Types for the JSON payload returned by platform oEmbed endpoints, and the
//! soft-failure result the fetcher always resolves to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A width or height reported by an oEmbed provider.
///
/// Most providers report pixel integers; TikTok reports responsive values
/// like `"100%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Pixel count
    Pixels(u64),
    /// Non-numeric value such as `"100%"`
    Other(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}", px),
            Dimension::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Metadata returned by a platform's oEmbed endpoint.
///
/// Field names mirror the oEmbed wire format; unknown fields in the response
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OembedMetadata {
    /// Content title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author or channel name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// Provider (platform) name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    /// Embed width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,

    /// Embed height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Thumbnail image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Ready-to-use embed markup supplied by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl OembedMetadata {
    /// Provider-supplied embed markup, if present and non-empty
    pub fn embed_html(&self) -> Option<&str> {
        self.html.as_deref().filter(|html| !html.trim().is_empty())
    }

    /// Labeled metadata lines for display.
    ///
    /// One line per available field; absent fields are omitted entirely.
    /// Dimensions only appear when both width and height were reported.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(title) = &self.title {
            lines.push(format!("Title: {}", title));
        }
        if let Some(author) = &self.author_name {
            lines.push(format!("Author: {}", author));
        }
        if let Some(provider) = &self.provider_name {
            lines.push(format!("Platform: {}", provider));
        }
        if let (Some(width), Some(height)) = (&self.width, &self.height) {
            lines.push(format!("Dimensions: {} × {}", width, height));
        }
        if self.thumbnail_url.is_some() {
            lines.push("Thumbnail: available".to_string());
        }

        lines
    }
}

/// Outcome of a metadata fetch.
///
/// The fetcher always resolves to one of these; transport failures, error
/// statuses, and malformed payloads all become [`MetadataResult::Unavailable`]
/// with a diagnostic instead of an error the caller has to handle.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataResult {
    /// The endpoint answered with a parseable payload
    Available(OembedMetadata),
    /// The endpoint could not be reached or did not answer usefully
    Unavailable {
        /// Human-readable diagnostic
        reason: String,
    },
}

impl MetadataResult {
    /// Wrap a failure diagnostic
    pub fn unavailable(reason: impl Into<String>) -> Self {
        MetadataResult::Unavailable { reason: reason.into() }
    }

    /// The payload, when one was retrieved
    pub fn metadata(&self) -> Option<&OembedMetadata> {
        match self {
            MetadataResult::Available(metadata) => Some(metadata),
            MetadataResult::Unavailable { .. } => None,
        }
    }

    /// True when a payload was retrieved
    pub fn is_available(&self) -> bool {
        matches!(self, MetadataResult::Available(_))
    }

    /// Diagnostic for the failed fetch, when unavailable
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            MetadataResult::Available(_) => None,
            MetadataResult::Unavailable { reason } => Some(reason),
        }
    }
}
