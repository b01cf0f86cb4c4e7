//! URL modeling and filename derivation.
//!
//! Turns a source URL into the file name a `*` placeholder resolves to, plus the
//! extension a `&` placeholder carries over.

mod path;
mod sanitize;

pub use path::{decode_segment, last_path_segment};
pub use sanitize::sanitize_segment;

use crate::error::ResolveError;

/// File name derived from a URL's final path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameInfo {
    /// Everything before the last `.`; interior dots are kept.
    pub base_name: String,
    /// Text after the last `.`, lower-cased. `None` only when the name has no `.`.
    pub extension: Option<String>,
    /// The decoded segment exactly as it appears in the URL, case preserved.
    pub full_name: String,
}

impl FileNameInfo {
    /// Splits a decoded file name at its last `.`.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((base, ext)) => Self {
                base_name: base.to_string(),
                extension: Some(ext.to_lowercase()),
                full_name: name.to_string(),
            },
            None => Self {
                base_name: name.to_string(),
                extension: None,
                full_name: name.to_string(),
            },
        }
    }

    /// The extension as written in the URL, without lower-casing.
    pub fn original_extension(&self) -> Option<&str> {
        self.extension
            .as_ref()
            .and_then(|_| self.full_name.get(self.base_name.len() + 1..))
    }
}

/// Extracts the file name from an absolute URL.
///
/// # Examples
///
/// - `extract("https://ex.com/a/report.PDF")` → base `report`, extension `pdf`, full `report.PDF`
/// - `extract("https://ex.com/%E6%96%87%E4%BB%B6.txt")` → base `文件`, extension `txt`
/// - `extract("https://ex.com/downloads/LICENSE")` → base `LICENSE`, no extension
/// - `extract("https://ex.com/dir/")`, `extract("https://ex.com/")` → `EmptyFileName`
pub fn extract(url: &str) -> Result<FileNameInfo, ResolveError> {
    let parsed = url::Url::parse(url).map_err(|source| ResolveError::MalformedUrl {
        url: url.to_string(),
        source,
    })?;

    let empty = || ResolveError::EmptyFileName {
        url: url.to_string(),
    };

    let raw = last_path_segment(&parsed).ok_or_else(empty)?;
    let decoded = sanitize_segment(&decode_segment(raw));
    if decoded.is_empty() || decoded == "." || decoded == ".." {
        return Err(empty());
    }

    Ok(FileNameInfo::from_name(&decoded))
}
