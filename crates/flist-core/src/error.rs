//! Error types for template resolution.
//!
//! Every kind except [`ResolveError::InvalidInput`] is recovered per entry by the
//! resolver and reported as an [`EntryWarning`]; `InvalidInput` aborts the call.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Source URL does not parse as an absolute URL.
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// URL path has no usable final segment (e.g. it ends in `/`).
    #[error("URL has no file name in its path: {url}")]
    EmptyFileName { url: String },

    /// A later entry resolved to a path already taken by a different URL.
    #[error("path {path} shadows entry #{shadowed_index} ({shadowed_url})")]
    PathCollision {
        path: String,
        shadowed_url: String,
        shadowed_index: usize,
    },

    /// A placeholder token occurs more than once in one template path.
    #[error("placeholder '{token}' appears {count} times; all occurrences replaced")]
    RepeatedPlaceholder { token: char, count: usize },

    /// Template map document is not an object of string to string.
    #[error("invalid template map: {message}")]
    InvalidInput { message: String },
}

impl ResolveError {
    /// True for kinds the resolver recovers from without aborting the batch.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ResolveError::InvalidInput { .. })
    }
}

/// Recoverable error attached to one template entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    /// Position of the entry in the input map.
    pub index: usize,
    pub template_path: String,
    pub error: ResolveError,
}

impl fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{} ({}): {}", self.index, self.template_path, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_the_only_fatal_kind() {
        let fatal = ResolveError::InvalidInput {
            message: "expected a map".to_string(),
        };
        assert!(!fatal.is_recoverable());
        assert!(ResolveError::EmptyFileName {
            url: "https://example.com/".to_string()
        }
        .is_recoverable());
    }

    #[test]
    fn warning_display_names_entry() {
        let w = EntryWarning {
            index: 3,
            template_path: "/a/*".to_string(),
            error: ResolveError::EmptyFileName {
                url: "https://example.com/".to_string(),
            },
        };
        assert_eq!(
            w.to_string(),
            "entry #3 (/a/*): URL has no file name in its path: https://example.com/"
        );
    }

    #[test]
    fn collision_display_names_shadowed_url() {
        let e = ResolveError::PathCollision {
            path: "/a".to_string(),
            shadowed_url: "https://example.com/1".to_string(),
            shadowed_index: 0,
        };
        assert_eq!(
            e.to_string(),
            "path /a shadows entry #0 (https://example.com/1)"
        );
    }
}
