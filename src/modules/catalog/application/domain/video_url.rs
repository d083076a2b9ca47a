use url::Url;

use crate::shared::error::CoreError;

/// Lesson videos are hosted on YouTube only; everything else is rejected
/// at the edge.
const ALLOWED_VIDEO_HOSTS: [&str; 4] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "youtu.be",
];

pub fn validate_video_url(value: &str) -> Result<(), CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::validation("Video URL cannot be empty"));
    }

    let parsed = Url::parse(value)
        .map_err(|_| CoreError::validation("Video URL is not a valid URL"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CoreError::validation(
            "Only http/https video links are allowed",
        ));
    }

    let host = parsed.host_str().unwrap_or("").to_lowercase();
    if !ALLOWED_VIDEO_HOSTS.contains(&host.as_str()) {
        return Err(CoreError::validation(
            "Video link must point to YouTube (youtube.com or youtu.be)",
        ));
    }

    Ok(())
}
