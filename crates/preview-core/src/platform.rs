//! Supported platforms and URL matching
//!
//! The platform registry is the ordered constant [`Platform::ALL`]; matching
//! iterates it front to back and the first platform whose pattern tests true
//! claims the URL. Registry order is load-bearing; there is no scoring.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A supported media platform.
///
/// Each variant carries its own URL patterns, oEmbed endpoint, and fallback
/// embed behavior, dispatched via `match` rather than per-entry closures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// YouTube videos and shorts
    YouTube,
    /// Instagram posts, reels, and IGTV
    Instagram,
    /// Facebook videos, watch pages, and reels
    Facebook,
    /// TikTok videos
    TikTok,
    /// Audiomack songs, albums, and playlists
    Audiomack,
}

impl Platform {
    /// Registry order. A URL matches at most the first satisfying platform.
    pub const ALL: [Platform; 5] = [
        Platform::YouTube,
        Platform::Instagram,
        Platform::Facebook,
        Platform::TikTok,
        Platform::Audiomack,
    ];

    /// Unique short identifier
    pub fn id(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::TikTok => "tiktok",
            Platform::Audiomack => "audiomack",
        }
    }

    /// Human-readable platform name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::Audiomack => "Audiomack",
        }
    }

    /// oEmbed metadata endpoint for this platform
    pub fn oembed_endpoint(&self) -> &'static str {
        match self {
            Platform::YouTube => "https://www.youtube.com/oembed",
            Platform::Instagram => "https://api.instagram.com/oembed",
            Platform::Facebook => "https://www.facebook.com/plugins/video/oembed.json",
            Platform::TikTok => "https://www.tiktok.com/oembed",
            Platform::Audiomack => "https://audiomack.com/oembed",
        }
    }

    /// URL patterns, tested in declaration order. Tolerant of missing
    /// protocol and `www.` prefixes.
    fn patterns(&self) -> &'static [Regex] {
        static YOUTUBE: OnceLock<Vec<Regex>> = OnceLock::new();
        static INSTAGRAM: OnceLock<Vec<Regex>> = OnceLock::new();
        static FACEBOOK: OnceLock<Vec<Regex>> = OnceLock::new();
        static TIKTOK: OnceLock<Vec<Regex>> = OnceLock::new();
        static AUDIOMACK: OnceLock<Vec<Regex>> = OnceLock::new();

        match self {
            Platform::YouTube => YOUTUBE.get_or_init(|| {
                vec![Regex::new(
                    r"(?i)(?:https?://)?(?:www\.)?(?:youtube\.com|youtu\.be)/(?:watch\?v=|embed/|v/|shorts/|playlist\?|channel/|c/|user/)?([a-zA-Z0-9_-]+)",
                )
                .unwrap()]
            }),
            Platform::Instagram => INSTAGRAM.get_or_init(|| {
                vec![Regex::new(
                    r"(?i)(?:https?://)?(?:www\.)?instagram\.com/(?:p|reel|tv)/([a-zA-Z0-9_-]+)",
                )
                .unwrap()]
            }),
            Platform::Facebook => FACEBOOK.get_or_init(|| {
                vec![
                    Regex::new(
                        r"(?i)(?:https?://)?(?:www\.)?facebook\.com/(?:[^/]+/)?(?:videos|watch|reel)/[0-9]+",
                    )
                    .unwrap(),
                    Regex::new(r"(?i)(?:https?://)?(?:www\.)?fb\.watch/([a-zA-Z0-9_-]+)").unwrap(),
                ]
            }),
            Platform::TikTok => TIKTOK.get_or_init(|| {
                vec![
                    Regex::new(r"(?i)(?:https?://)?(?:www\.)?tiktok\.com/@[^/]+/video/([0-9]+)")
                        .unwrap(),
                    Regex::new(r"(?i)(?:https?://)?(?:vm\.)?tiktok\.com/([a-zA-Z0-9]+)").unwrap(),
                ]
            }),
            Platform::Audiomack => AUDIOMACK.get_or_init(|| {
                vec![Regex::new(
                    r"(?i)(?:https?://)?(?:www\.)?audiomack\.com/(?:[^/]+/)?(?:song|album|playlist)/[^/]+",
                )
                .unwrap()]
            }),
        }
    }

    /// Check whether a URL belongs to this platform
    pub fn matches(&self, url: &str) -> bool {
        self.patterns().iter().any(|pattern| pattern.is_match(url))
    }

    /// Find the first platform in registry order that matches the URL.
    ///
    /// Pure function of the input and the static registry; safe for
    /// concurrent use.
    pub fn detect(url: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|platform| platform.matches(url))
    }

    /// Companion script this platform's fallback embed needs, if any
    pub fn companion_script(&self) -> Option<CompanionScript> {
        match self {
            Platform::Instagram => Some(CompanionScript::Instagram),
            Platform::TikTok => Some(CompanionScript::TikTok),
            _ => None,
        }
    }
}

/// Client-side script that upgrades placeholder embed markup into a rendered
/// widget.
///
/// Instagram and TikTok fallback embeds are blockquote placeholders; the
/// platform's own script converts them in the browser. The orchestrator only
/// reports which script a preview needs; loading it (and replacing a
/// previously loaded one) is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionScript {
    /// Instagram's embed script
    Instagram,
    /// TikTok's embed script
    TikTok,
}

impl CompanionScript {
    /// URL of the script resource
    pub fn script_url(&self) -> &'static str {
        match self {
            CompanionScript::Instagram => "https://www.instagram.com/embed.js",
            CompanionScript::TikTok => "https://www.tiktok.com/embed.js",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_youtube_watch_url() {
        assert_eq!(
            Platform::detect("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(Platform::YouTube)
        );
    }

    #[test]
    fn test_detect_youtube_short_domain() {
        assert_eq!(Platform::detect("https://youtu.be/dQw4w9WgXcQ"), Some(Platform::YouTube));
    }

    #[test]
    fn test_detect_youtube_shorts() {
        assert_eq!(
            Platform::detect("https://www.youtube.com/shorts/abc123XYZ"),
            Some(Platform::YouTube)
        );
    }

    #[test]
    fn test_detect_instagram_post() {
        assert_eq!(
            Platform::detect("https://www.instagram.com/p/Cexample/"),
            Some(Platform::Instagram)
        );
    }

    #[test]
    fn test_detect_instagram_reel_and_tv() {
        assert_eq!(
            Platform::detect("https://instagram.com/reel/Xyz-123/"),
            Some(Platform::Instagram)
        );
        assert_eq!(
            Platform::detect("https://www.instagram.com/tv/AbC_987/"),
            Some(Platform::Instagram)
        );
    }

    #[test]
    fn test_detect_facebook_video() {
        assert_eq!(
            Platform::detect("https://www.facebook.com/somepage/videos/123456789"),
            Some(Platform::Facebook)
        );
    }

    #[test]
    fn test_detect_facebook_short_link() {
        assert_eq!(Platform::detect("https://fb.watch/abc_123/"), Some(Platform::Facebook));
    }

    #[test]
    fn test_detect_tiktok_video() {
        assert_eq!(
            Platform::detect("https://www.tiktok.com/@user/video/123456789"),
            Some(Platform::TikTok)
        );
    }

    #[test]
    fn test_detect_tiktok_short_link() {
        assert_eq!(Platform::detect("https://vm.tiktok.com/ZMabc123/"), Some(Platform::TikTok));
    }

    #[test]
    fn test_detect_audiomack_song() {
        assert_eq!(
            Platform::detect("https://audiomack.com/artist/song/example-track"),
            Some(Platform::Audiomack)
        );
    }

    #[test]
    fn test_detect_tolerates_missing_protocol_and_www() {
        assert_eq!(Platform::detect("youtube.com/watch?v=abc"), Some(Platform::YouTube));
        assert_eq!(Platform::detect("www.instagram.com/p/Cabc/"), Some(Platform::Instagram));
    }

    #[test]
    fn test_detect_unsupported_url() {
        assert_eq!(Platform::detect("https://example.com/blog/post"), None);
        assert_eq!(Platform::detect("https://vimeo.com/12345"), None);
    }

    #[test]
    fn test_detect_first_match_wins() {
        // Matches both the YouTube pattern (youtu.be/) and the TikTok
        // fallback pattern (tiktok.com/<slug>); YouTube is earlier in the
        // registry and must claim it.
        let ambiguous = "https://youtu.be/abc123?share=tiktok.com/xyz789";
        assert!(Platform::YouTube.matches(ambiguous));
        assert!(Platform::TikTok.matches(ambiguous));
        assert_eq!(Platform::detect(ambiguous), Some(Platform::YouTube));
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(
            Platform::ALL,
            [
                Platform::YouTube,
                Platform::Instagram,
                Platform::Facebook,
                Platform::TikTok,
                Platform::Audiomack,
            ]
        );
    }

    #[test]
    fn test_ids_and_display_names() {
        assert_eq!(Platform::YouTube.id(), "youtube");
        assert_eq!(Platform::TikTok.id(), "tiktok");
        assert_eq!(Platform::YouTube.display_name(), "YouTube");
        assert_eq!(Platform::Audiomack.display_name(), "Audiomack");
    }

    #[test]
    fn test_oembed_endpoints() {
        assert_eq!(Platform::YouTube.oembed_endpoint(), "https://www.youtube.com/oembed");
        assert_eq!(
            Platform::Facebook.oembed_endpoint(),
            "https://www.facebook.com/plugins/video/oembed.json"
        );
        assert_eq!(Platform::Audiomack.oembed_endpoint(), "https://audiomack.com/oembed");
    }

    #[test]
    fn test_companion_scripts() {
        assert_eq!(Platform::Instagram.companion_script(), Some(CompanionScript::Instagram));
        assert_eq!(Platform::TikTok.companion_script(), Some(CompanionScript::TikTok));
        assert_eq!(Platform::YouTube.companion_script(), None);
        assert_eq!(Platform::Facebook.companion_script(), None);
        assert_eq!(Platform::Audiomack.companion_script(), None);
    }

    #[test]
    fn test_companion_script_urls() {
        assert_eq!(
            CompanionScript::Instagram.script_url(),
            "https://www.instagram.com/embed.js"
        );
        assert_eq!(CompanionScript::TikTok.script_url(), "https://www.tiktok.com/embed.js");
    }

    #[test]
    fn test_platform_serialization() {
        assert_eq!(serde_json::to_string(&Platform::YouTube).unwrap(), "\"youtube\"");
        assert_eq!(serde_json::to_string(&Platform::TikTok).unwrap(), "\"tiktok\"");

        let parsed: Platform = serde_json::from_str("\"audiomack\"").unwrap();
        assert_eq!(parsed, Platform::Audiomack);
    }
}
