//! oEmbed metadata fetching for MediaLens
//!
//! The network leaf of the workspace: a reqwest-based client that queries a
//! platform's oEmbed endpoint and always resolves to a
//! [`preview_core::MetadataResult`]. Failures become data, never errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;

pub use client::{MetadataSource, OembedClient, OembedClientConfig};
