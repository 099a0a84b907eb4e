//! Embedded video parsing for the click-to-load placeholders.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DEFAULT_ASPECT_PADDING, THUMBNAIL_HOST, VIDEO_ID_LEN};

const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "youtube-nocookie.com", "youtu.be"];

// watch?v=ID, embed/ID, e/ID, v/ID and youtu.be/ID, with exactly eleven id characters.
static VIDEO_ID_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube(?:-nocookie)?\.com/(?:(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)",
    )
    .ok()
});

/// An eleven-character hosted video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> String {
        format!("{THUMBNAIL_HOST}/{}/hqdefault.jpg", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[must_use]
pub fn is_video_host(src: &str) -> bool {
    VIDEO_HOSTS.iter().any(|host| src.contains(host))
}

/// Pull the video identifier out of an embed or watch URL.
///
/// Returns `None` for URLs on other hosts or with no recognisable id segment.
#[must_use]
pub fn extract_video_id(src: &str) -> Option<VideoId> {
    if !is_video_host(src) {
        return None;
    }
    let re = VIDEO_ID_RE.as_ref()?;
    let id = re.captures(src)?.get(1)?.as_str();
    (id.len() == VIDEO_ID_LEN).then(|| VideoId(id.to_string()))
}

/// The embed source to load once the visitor clicks the placeholder.
#[must_use]
pub fn autoplay_src(src: &str) -> String {
    let sep = if src.contains('?') { '&' } else { '?' };
    format!("{src}{sep}autoplay=1")
}

/// `padding-bottom` percentage that keeps the iframe's aspect ratio.
///
/// Missing, zero or non-numeric dimensions fall back to 16:9.
#[must_use]
pub fn aspect_padding_percent(width: Option<&str>, height: Option<&str>) -> f64 {
    let parse = |raw: Option<&str>| {
        raw.and_then(|v| v.trim().trim_end_matches("px").parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
    };
    match (parse(width), parse(height)) {
        (Some(w), Some(h)) => h / w * 100.0,
        _ => DEFAULT_ASPECT_PADDING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_known_url_shapes() {
        let cases = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0",
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
        ];
        for url in cases {
            let id = extract_video_id(url).unwrap_or_else(|| panic!("no id in {url}"));
            assert_eq!(id.as_str(), "dQw4w9WgXcQ", "{url}");
        }
    }

    #[test]
    fn rejects_unrecognised_urls() {
        assert_eq!(extract_video_id("https://www.youtube.com/channel/UCabc"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/embed/short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQextra"), None);
        assert_eq!(extract_video_id("https://player.vimeo.com/video/76979871"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn thumbnail_uses_identifier() {
        let id = extract_video_id("https://youtu.be/dQw4w9WgXcQ").expect("id");
        assert_eq!(
            id.thumbnail_url(),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
    }

    #[test]
    fn autoplay_picks_separator() {
        assert_eq!(
            autoplay_src("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
        assert_eq!(
            autoplay_src("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0&autoplay=1"
        );
    }

    #[test]
    fn aspect_padding_follows_dimensions() {
        assert!((aspect_padding_percent(Some("560"), Some("315")) - 56.25).abs() < 1e-9);
        assert!((aspect_padding_percent(Some("400px"), Some("300px")) - 75.0).abs() < 1e-9);
        assert!((aspect_padding_percent(Some("100%"), Some("315")) - 56.25).abs() < 1e-9);
        assert!((aspect_padding_percent(None, Some("315")) - 56.25).abs() < 1e-9);
        assert!((aspect_padding_percent(Some("0"), Some("0")) - 56.25).abs() < 1e-9);
    }
}
