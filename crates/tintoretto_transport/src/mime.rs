//! MIME and file name helpers for upload parts.

use tintoretto_core::MediaKind;

/// Guess a MIME type from a file name's extension.
pub(crate) fn mime_from_name(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// MIME type for a re-fetched media part.
///
/// The hosted URL usually keeps the original extension; when it does not,
/// fall back to a generic type for the content kind.
pub(crate) fn part_mime(kind: &MediaKind, url: &str) -> &'static str {
    let from_name = mime_from_name(file_name_from_url(url).as_str());
    if from_name != "application/octet-stream" {
        return from_name;
    }
    match kind {
        MediaKind::Image => "image/jpeg",
        MediaKind::Video => "video/mp4",
        MediaKind::Other => "application/octet-stream",
    }
}

/// Last path segment of a URL, query stripped.
pub(crate) fn file_name_from_url(url: &str) -> String {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    without_query
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or("media")
        .to_string()
}
