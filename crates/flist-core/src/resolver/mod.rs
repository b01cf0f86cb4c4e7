//! Template resolution: template map in, collision-free `path → URL` table out.
//!
//! One call is one pass. Failures on a single entry degrade to a fallback name
//! and a warning; the batch itself never fails.

mod map;
mod parallel;
mod pass;

pub use map::ResolvedMap;
pub use parallel::resolve_all;

use crate::error::EntryWarning;
use crate::fingerprint::DEFAULT_FINGERPRINT_LEN;
use crate::template::TemplateMap;

use pass::Pass;

/// Knobs for one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Prepended to every file name a placeholder resolves to.
    pub prefix: String,
    /// Hex width of `&` fingerprints.
    pub fingerprint_length: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            fingerprint_length: DEFAULT_FINGERPRINT_LEN,
        }
    }
}

/// Output of one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub map: ResolvedMap,
    /// Recoverable problems, in the order they were hit.
    pub warnings: Vec<EntryWarning>,
}

/// Resolves every entry of `map` in order.
///
/// - No placeholder: the path passes through unchanged.
/// - `*`: the URL's decoded file name, or `unknown_file_<fp>.bin` if it has none.
/// - `&`: a fingerprint of the URL plus its extension, shared by every entry
///   with the same URL in this pass.
/// - Same concrete path from different URLs: the later entry wins.
///
/// Output is a pure function of `map` and `options`.
pub fn resolve(map: &TemplateMap, options: &ResolveOptions) -> Resolution {
    let mut pass = Pass::new(options);
    for (index, entry) in map.entries().iter().enumerate() {
        pass.resolve_entry(index, entry);
    }
    let resolution = pass.finish();
    tracing::debug!(
        entries = map.len(),
        resolved = resolution.map.len(),
        warnings = resolution.warnings.len(),
        "template map resolved"
    );
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::fingerprint::fingerprint_default;

    fn map(pairs: &[(&str, &str)]) -> TemplateMap {
        pairs.iter().copied().collect()
    }

    fn run(pairs: &[(&str, &str)]) -> Resolution {
        resolve(&map(pairs), &ResolveOptions::default())
    }

    #[test]
    fn identity_pass_through() {
        let r = run(&[
            ("/Github/Github汉化工具.7z", "https://github.com/robotze/GithubDesktopZhTool/releases/download/3.4.9/GithubDesktop.7z"),
            ("/opaque", "not even a url"),
        ]);
        assert_eq!(
            r.map.paths().collect::<Vec<_>>(),
            vec!["/Github/Github汉化工具.7z", "/opaque"]
        );
        assert_eq!(r.map.get("/opaque"), Some("not even a url"));
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn original_keeps_case() {
        let r = run(&[("/x/*", "https://ex.com/a/report.PDF")]);
        assert_eq!(r.map.get("/x/report.PDF"), Some("https://ex.com/a/report.PDF"));
    }

    #[test]
    fn original_with_prefix() {
        let opts = ResolveOptions {
            prefix: "dl_".to_string(),
            ..Default::default()
        };
        let r = resolve(&map(&[("/x/*", "https://ex.com/a.zip")]), &opts);
        assert_eq!(r.map.paths().collect::<Vec<_>>(), vec!["/x/dl_a.zip"]);
    }

    #[test]
    fn unique_is_fingerprint_plus_extension() {
        let url = "https://ex.com/a/report.pdf";
        let r = run(&[("/x/&", url)]);
        let expected = format!("/x/{}.pdf", fingerprint_default(url));
        assert_eq!(r.map.get(&expected), Some(url));
    }

    #[test]
    fn unique_keeps_extension_case() {
        let url = "https://ex.com/a/report.PDF";
        let r = run(&[("/x/&", url)]);
        let expected = format!("/x/{}.PDF", fingerprint_default(url));
        assert!(r.map.contains_path(&expected));
    }

    #[test]
    fn unique_without_extension() {
        let url = "https://ex.com/downloads/LICENSE";
        let r = run(&[("/x/&", url)]);
        let expected = format!("/x/{}", fingerprint_default(url));
        assert!(r.map.contains_path(&expected));
    }

    #[test]
    fn unique_keeps_trailing_dot_of_empty_extension() {
        let url = "https://ex.com/a/name.";
        let r = run(&[("/x/&", url)]);
        let expected = format!("/x/{}.", fingerprint_default(url));
        assert_eq!(r.map.get(&expected), Some(url));
    }

    #[test]
    fn unique_width_is_bounded() {
        let url = "https://ex.com/a.bin";
        let opts = ResolveOptions {
            fingerprint_length: usize::MAX,
            ..Default::default()
        };
        let r = resolve(&map(&[("/&", url)]), &opts);
        let path = r.map.paths().next().unwrap();
        assert_eq!(path.len(), "/".len() + 128 + ".bin".len());
    }

    #[test]
    fn directory_url_falls_back() {
        let url = "https://ex.com/dir/";
        let r = run(&[("/a/*", url)]);
        let expected = format!("/a/unknown_file_{}.bin", fingerprint_default(url));
        assert!(r.map.contains_path(&expected));
        assert!(matches!(r.warnings[0].error, ResolveError::EmptyFileName { .. }));
    }

    #[test]
    fn unique_distinct_urls_distinct_paths() {
        let r = run(&[("/x/&", "https://ex.com/a.pdf"), ("/x/&", "https://ex.com/b.pdf")]);
        assert_eq!(r.map.len(), 2);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn unique_memo_shared_within_pass() {
        let url = "https://ex.com/a.pdf";
        let r = run(&[("/x/&", url), ("/y/&", url)]);
        let paths: Vec<&str> = r.map.paths().collect();
        assert_eq!(paths.len(), 2);
        let x = paths[0].strip_prefix("/x/").unwrap();
        let y = paths[1].strip_prefix("/y/").unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn same_url_same_path_is_not_a_collision() {
        let url = "https://ex.com/a.pdf";
        let r = run(&[("/x/&", url), ("/x/&", url)]);
        assert_eq!(r.map.len(), 1);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn both_placeholders_in_one_path() {
        let url = "https://ex.com/v/clip.mp4";
        let r = run(&[("/&/*", url)]);
        let expected = format!("/{}.mp4/clip.mp4", fingerprint_default(url));
        assert!(r.map.contains_path(&expected));
    }

    #[test]
    fn malformed_url_falls_back_and_batch_continues() {
        let r = run(&[("/a/*", "not a url"), ("/b/*", "https://ex.com/f.zip")]);
        assert_eq!(r.map.len(), 2);
        let expected = format!("/a/unknown_file_{}.bin", fingerprint_default("not a url"));
        assert_eq!(r.map.get(&expected), Some("not a url"));
        assert_eq!(r.map.get("/b/f.zip"), Some("https://ex.com/f.zip"));
        assert_eq!(r.warnings.len(), 1);
        assert_eq!(r.warnings[0].index, 0);
        assert!(matches!(r.warnings[0].error, ResolveError::MalformedUrl { .. }));
    }

    #[test]
    fn empty_file_name_falls_back() {
        let r = run(&[("/a/*", "https://ex.com/")]);
        let expected = format!(
            "/a/unknown_file_{}.bin",
            fingerprint_default("https://ex.com/")
        );
        assert!(r.map.contains_path(&expected));
        assert!(matches!(r.warnings[0].error, ResolveError::EmptyFileName { .. }));
    }

    #[test]
    fn unique_on_malformed_url_has_no_extension() {
        let r = run(&[("/a/&", "::bad::")]);
        let expected = format!("/a/{}", fingerprint_default("::bad::"));
        assert!(r.map.contains_path(&expected));
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn collision_last_write_wins() {
        let r = run(&[("/a", "https://ex.com/1"), ("/a", "https://ex.com/2")]);
        assert_eq!(r.map.len(), 1);
        assert_eq!(r.map.get("/a"), Some("https://ex.com/2"));
        assert_eq!(
            r.warnings[0].error,
            ResolveError::PathCollision {
                path: "/a".to_string(),
                shadowed_url: "https://ex.com/1".to_string(),
                shadowed_index: 0,
            }
        );
        assert_eq!(r.warnings[0].index, 1);
    }

    #[test]
    fn collision_through_original_names() {
        let r = run(&[
            ("/d/*", "https://mirror-a.example.com/pool/file.iso"),
            ("/d/*", "https://mirror-b.example.com/pool/file.iso"),
        ]);
        assert_eq!(r.map.len(), 1);
        assert_eq!(
            r.map.get("/d/file.iso"),
            Some("https://mirror-b.example.com/pool/file.iso")
        );
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn repeated_placeholder_warns_and_replaces_all() {
        let r = run(&[("/*/*", "https://ex.com/a.txt")]);
        assert!(r.map.contains_path("/a.txt/a.txt"));
        assert_eq!(
            r.warnings[0].error,
            ResolveError::RepeatedPlaceholder {
                token: '*',
                count: 2
            }
        );
    }

    #[test]
    fn percent_decoded_original_name() {
        let r = run(&[("/docs/*", "https://ex.com/%E6%96%87%E4%BB%B6.txt")]);
        assert!(r.map.contains_path("/docs/文件.txt"));
    }

    #[test]
    fn deterministic() {
        let m = map(&[
            ("/x/&", "https://ex.com/a.pdf"),
            ("/y/*", "bad url"),
            ("/z/&", "https://ex.com/b"),
        ]);
        let opts = ResolveOptions::default();
        assert_eq!(resolve(&m, &opts), resolve(&m, &opts));
    }
}
