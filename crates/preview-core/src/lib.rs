//! Core platform resolution logic for MediaLens
//!
//! This crate contains the pure pieces of preview generation: identifying
//! which platform a URL belongs to, extracting its content identifier,
//! modeling oEmbed metadata, and rendering embed markup with fallbacks.
//! Network I/O lives in the `oembed-client` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod embed;
pub mod extract;
pub mod metadata;
pub mod platform;

pub use embed::render_embed;
pub use extract::extract_media_id;
pub use metadata::{Dimension, MetadataResult, OembedMetadata};
pub use platform::{CompanionScript, Platform};
