//! Content identifier extraction
//!
//! Derives the platform-specific media identifier from a URL using ordered
//! splitting rules. Absence of an identifier is a legitimate outcome, never
//! an error; callers degrade to less specific embed markup.

use std::sync::OnceLock;

use regex::Regex;

use crate::platform::Platform;

/// Extract the platform-specific media identifier from a URL.
///
/// The identifier's meaning varies by platform: a video id for YouTube,
/// TikTok, and Facebook, a post slug for Instagram, and the full original
/// URL for Audiomack (its oEmbed endpoint wants the whole URL rather than an
/// isolated id). Returns `None` when no rule matches.
pub fn extract_media_id(url: &str, platform: Platform) -> Option<String> {
    match platform {
        Platform::YouTube => extract_youtube_id(url),
        Platform::Instagram => capture_group(instagram_id_regex(), url, 2),
        Platform::Facebook => capture_group(facebook_id_regex(), url, 2),
        Platform::TikTok => extract_tiktok_id(url),
        Platform::Audiomack => Some(url.to_string()),
    }
}

/// youtu.be short links take precedence over /shorts/ paths, which take
/// precedence over the v= query parameter. First satisfied rule wins.
fn extract_youtube_id(url: &str) -> Option<String> {
    let segment = if url.contains("youtu.be/") {
        url.split("youtu.be/").nth(1).and_then(|rest| rest.split('?').next())
    } else if url.contains("youtube.com/shorts/") {
        url.split("shorts/").nth(1).and_then(|rest| rest.split('?').next())
    } else if url.contains("v=") {
        url.split("v=").nth(1).and_then(|rest| rest.split('&').next())
    } else {
        None
    };

    segment.filter(|id| !id.is_empty()).map(|id| id.to_string())
}

/// Numeric id after /video/, falling back to the slug after the TikTok
/// domain for vm.tiktok.com share links.
fn extract_tiktok_id(url: &str) -> Option<String> {
    static VIDEO_ID: OnceLock<Regex> = OnceLock::new();
    static SHORT_LINK: OnceLock<Regex> = OnceLock::new();

    let video_id = VIDEO_ID.get_or_init(|| Regex::new(r"video/(\d+)").unwrap());
    if let Some(caps) = video_id.captures(url) {
        return Some(caps[1].to_string());
    }

    let short_link = SHORT_LINK.get_or_init(|| Regex::new(r"tiktok\.com/([^/?]+)").unwrap());
    capture_group(short_link, url, 1)
}

fn instagram_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(p|reel|tv)/([a-zA-Z0-9_-]+)").unwrap())
}

fn facebook_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/(videos|watch|reel)/(\d+)").unwrap())
}

fn capture_group(re: &Regex, url: &str, group: usize) -> Option<String> {
    re.captures(url)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url() {
        assert_eq!(
            extract_media_id("https://www.youtube.com/watch?v=ABC123", Platform::YouTube),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_watch_url_with_extra_params() {
        assert_eq!(
            extract_media_id("https://www.youtube.com/watch?v=ABC123&t=42s", Platform::YouTube),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_shorts_url() {
        assert_eq!(
            extract_media_id("https://www.youtube.com/shorts/ABC123?x=1", Platform::YouTube),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_short_domain() {
        assert_eq!(
            extract_media_id("https://youtu.be/ABC123?x=1", Platform::YouTube),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_short_domain_takes_precedence() {
        // A youtu.be link whose query string also carries v= must be split
        // on the short domain, not the query parameter.
        assert_eq!(
            extract_media_id("https://youtu.be/ABC123?v=OTHER", Platform::YouTube),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_youtube_no_id() {
        assert_eq!(extract_media_id("https://www.youtube.com/feed", Platform::YouTube), None);
        assert_eq!(extract_media_id("https://youtu.be/", Platform::YouTube), None);
    }

    #[test]
    fn test_tiktok_video_id() {
        assert_eq!(
            extract_media_id("https://www.tiktok.com/@user/video/123456789", Platform::TikTok),
            Some("123456789".to_string())
        );
    }

    #[test]
    fn test_tiktok_short_link_fallback() {
        assert_eq!(
            extract_media_id("https://vm.tiktok.com/ZMabc123", Platform::TikTok),
            Some("ZMabc123".to_string())
        );
    }

    #[test]
    fn test_instagram_post_slug() {
        assert_eq!(
            extract_media_id("https://www.instagram.com/p/Cexample/", Platform::Instagram),
            Some("Cexample".to_string())
        );
        assert_eq!(
            extract_media_id("https://www.instagram.com/reel/Xyz-12_3/", Platform::Instagram),
            Some("Xyz-12_3".to_string())
        );
        assert_eq!(
            extract_media_id("https://www.instagram.com/tv/AbC987/", Platform::Instagram),
            Some("AbC987".to_string())
        );
    }

    #[test]
    fn test_instagram_no_marker() {
        assert_eq!(
            extract_media_id("https://www.instagram.com/someuser/", Platform::Instagram),
            None
        );
    }

    #[test]
    fn test_facebook_video_id() {
        assert_eq!(
            extract_media_id("https://www.facebook.com/page/videos/123456789", Platform::Facebook),
            Some("123456789".to_string())
        );
        assert_eq!(
            extract_media_id("https://www.facebook.com/watch/987654321", Platform::Facebook),
            Some("987654321".to_string())
        );
        assert_eq!(
            extract_media_id("https://www.facebook.com/reel/555", Platform::Facebook),
            Some("555".to_string())
        );
    }

    #[test]
    fn test_facebook_non_numeric_not_extracted() {
        assert_eq!(
            extract_media_id("https://fb.watch/abc123/", Platform::Facebook),
            None
        );
    }

    #[test]
    fn test_audiomack_returns_full_url() {
        let url = "https://audiomack.com/artist/song/example-track";
        assert_eq!(extract_media_id(url, Platform::Audiomack), Some(url.to_string()));
    }
}
