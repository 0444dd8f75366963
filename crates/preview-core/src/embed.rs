//! Embed markup rendering
//!
//! Prefers provider-supplied oEmbed markup; otherwise falls back to a locally
//! constructed template per platform, and finally to a plain warning block
//! with a direct link. Rendering never fails; missing data degrades the
//! markup instead.

use crate::extract::extract_media_id;
use crate::metadata::MetadataResult;
use crate::platform::Platform;

/// Render embeddable markup for a URL.
///
/// Provider `html` from the metadata payload is authoritative when present
/// and non-empty. Without it, each platform gets its fallback template; a
/// YouTube URL with no extractable id degrades to the generic link block.
pub fn render_embed(url: &str, platform: Platform, metadata: &MetadataResult) -> String {
    if let Some(html) = metadata.metadata().and_then(|m| m.embed_html()) {
        return html.to_string();
    }

    tracing::debug!("No provider markup for {}, using fallback embed", platform.display_name());
    fallback_embed(url, platform)
}

fn fallback_embed(url: &str, platform: Platform) -> String {
    match platform {
        Platform::YouTube => match extract_media_id(url, platform) {
            Some(id) => format!(
                r#"<iframe src="https://www.youtube.com/embed/{}" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
                id
            ),
            None => generic_fallback(url, platform),
        },
        Platform::Facebook => format!(
            r#"<iframe src="https://www.facebook.com/plugins/video.php?href={}" frameborder="0" allow="autoplay; clipboard-write; encrypted-media; picture-in-picture; web-share" allowfullscreen></iframe>"#,
            urlencoding::encode(url)
        ),
        Platform::Instagram => format!(
            r#"<blockquote class="instagram-media" data-instgrm-permalink="{}" data-instgrm-version="14"></blockquote>"#,
            url
        ),
        Platform::TikTok => match extract_media_id(url, platform) {
            Some(id) => format!(
                r#"<blockquote class="tiktok-embed" cite="{}" data-video-id="{}"></blockquote>"#,
                url, id
            ),
            None => format!(r#"<blockquote class="tiktok-embed" cite="{}"></blockquote>"#, url),
        },
        Platform::Audiomack => {
            format!(r#"<iframe src="{}/embed" scrolling="no" frameborder="0"></iframe>"#, url)
        }
    }
}

/// Plain warning block with a direct link to the content on its platform.
fn generic_fallback(url: &str, platform: Platform) -> String {
    format!(
        r#"<div class="alert alert-warning">Direct embed not available. <a href="{}" target="_blank" rel="noopener">View on {}</a></div>"#,
        url,
        platform.display_name()
    )
}
