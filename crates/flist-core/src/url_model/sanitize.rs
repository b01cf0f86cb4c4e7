//! Keeps a decoded filename inside a single path segment.

/// Replaces characters that would split or corrupt a destination path segment.
///
/// - `/` and `\` (a decoded `%2F` must not add a directory level)
/// - `*` and `&`, which are placeholder tokens in template paths
/// - NUL and other control characters
///
/// Everything else, spaces and non-ASCII included, is kept as-is.
pub fn sanitize_segment(name: &str) -> String {
    name.chars()
        .map(|c| {
            if matches!(c, '/' | '\\' | '*' | '&') || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
