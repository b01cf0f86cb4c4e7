//! Filename extraction from URL path.

use std::borrow::Cow;

/// Returns the final path segment of a parsed URL, still percent-encoded.
///
/// `None` when the path ends in `/` (or is empty): a directory URL names no file.
/// Query and fragment are never part of `Url::path`, so they cannot leak into the name.
pub fn last_path_segment(url: &url::Url) -> Option<&str> {
    url.path().rsplit('/').next().filter(|s| !s.is_empty())
}

/// Percent-decodes a raw path segment.
///
/// Invalid UTF-8 after decoding is replaced lossily rather than rejected, so an
/// oddly encoded name still yields something usable.
pub fn decode_segment(segment: &str) -> String {
    match urlencoding::decode_binary(segment.as_bytes()) {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Cow::Owned(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
    }
}
