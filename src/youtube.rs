use once_cell::sync::Lazy;
use regex::Regex;

const VIDEO_ID_LEN: usize = 11;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
        .expect("valid YouTube URL pattern")
});
static BARE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9_-]{11})$").expect("valid YouTube id pattern"));

/// Extract the video id from a watch URL, short URL, embed URL or bare id.
///
/// Anything else that is exactly 11 characters long is returned as-is.
/// Length is counted in UTF-16 units, the way browsers measure strings.
pub fn extract_video_id(reference: Option<&str>) -> Option<String> {
    let trimmed = reference?.trim();

    for pattern in [&*URL_RE, &*BARE_ID_RE] {
        if let Some(id) = pattern.captures(trimmed).and_then(|c| c.get(1)) {
            return Some(id.as_str().to_string());
        }
    }

    (trimmed.encode_utf16().count() == VIDEO_ID_LEN).then(|| trimmed.to_string())
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
