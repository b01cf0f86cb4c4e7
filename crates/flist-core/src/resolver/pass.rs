//! State for one resolution pass over a single template map.

use std::collections::HashMap;

use crate::error::{EntryWarning, ResolveError};
use crate::fingerprint::fingerprint;
use crate::template::{placeholders_in, render, Placeholder, TemplateEntry};
use crate::url_model::{extract, FileNameInfo};

use super::map::ResolvedMap;
use super::{Resolution, ResolveOptions};

const FALLBACK_STEM: &str = "unknown_file_";
const FALLBACK_EXTENSION: &str = "bin";

/// Output table, unique-name memo, and warnings for one pass.
///
/// Created per `resolve` call and dropped with it; never shared between maps.
pub(super) struct Pass<'o> {
    options: &'o ResolveOptions,
    /// Source URL → generated `&` name.
    unique_names: HashMap<String, String>,
    /// Concrete path → index of the entry currently owning it.
    owners: HashMap<String, usize>,
    out: ResolvedMap,
    warnings: Vec<EntryWarning>,
}

impl<'o> Pass<'o> {
    pub(super) fn new(options: &'o ResolveOptions) -> Self {
        Self {
            options,
            unique_names: HashMap::new(),
            owners: HashMap::new(),
            out: ResolvedMap::new(),
            warnings: Vec::new(),
        }
    }

    pub(super) fn resolve_entry(&mut self, index: usize, entry: &TemplateEntry) {
        let placeholders = placeholders_in(&entry.template_path);
        if placeholders.is_empty() {
            self.insert(index, entry, entry.template_path.clone());
            return;
        }

        for &p in &placeholders {
            let count = p.count_in(&entry.template_path);
            if count > 1 {
                self.warn(
                    index,
                    entry,
                    ResolveError::RepeatedPlaceholder {
                        token: p.token(),
                        count,
                    },
                );
            }
        }

        let has_original = placeholders.contains(&Placeholder::Original);
        let has_unique = placeholders.contains(&Placeholder::Unique);

        let info = if has_original || !self.unique_names.contains_key(&entry.source_url) {
            match extract(&entry.source_url) {
                Ok(info) => Some(info),
                Err(e) => {
                    self.warn(index, entry, e);
                    None
                }
            }
        } else {
            None
        };

        let original = has_original.then(|| match &info {
            Some(info) => format!("{}{}", self.options.prefix, info.full_name),
            None => self.fallback_name(&entry.source_url),
        });
        let unique = has_unique.then(|| self.unique_name(&entry.source_url, info.as_ref()));

        let path = render(&entry.template_path, |p| match p {
            Placeholder::Original => original.as_deref().unwrap_or_default(),
            Placeholder::Unique => unique.as_deref().unwrap_or_default(),
        });
        self.insert(index, entry, path);
    }

    pub(super) fn finish(self) -> Resolution {
        Resolution {
            map: self.out,
            warnings: self.warnings,
        }
    }

    /// `&` name for `url`: reused from earlier in this pass, or fingerprinted now.
    fn unique_name(&mut self, url: &str, info: Option<&FileNameInfo>) -> String {
        if let Some(name) = self.unique_names.get(url) {
            return name.clone();
        }
        let mut name = format!(
            "{}{}",
            self.options.prefix,
            fingerprint(url, self.options.fingerprint_length)
        );
        if let Some(ext) = info.and_then(FileNameInfo::original_extension) {
            name.push('.');
            name.push_str(ext);
        }
        self.unique_names.insert(url.to_string(), name.clone());
        name
    }

    /// Deterministic stand-in when a `*` entry's URL yields no file name.
    fn fallback_name(&self, raw_url: &str) -> String {
        format!(
            "{}{}{}.{}",
            self.options.prefix,
            FALLBACK_STEM,
            fingerprint(raw_url, self.options.fingerprint_length),
            FALLBACK_EXTENSION
        )
    }

    fn insert(&mut self, index: usize, entry: &TemplateEntry, path: String) {
        tracing::debug!(
            index,
            template = %entry.template_path,
            path = %path,
            "resolved template entry"
        );
        let shadowed_index = self.owners.insert(path.clone(), index);
        let previous = self.out.insert(path.clone(), entry.source_url.clone());
        if let (Some(shadowed_url), Some(shadowed_index)) = (previous, shadowed_index) {
            if shadowed_url != entry.source_url {
                self.warn(
                    index,
                    entry,
                    ResolveError::PathCollision {
                        path,
                        shadowed_url,
                        shadowed_index,
                    },
                );
            }
        }
    }

    fn warn(&mut self, index: usize, entry: &TemplateEntry, error: ResolveError) {
        let warning = EntryWarning {
            index,
            template_path: entry.template_path.clone(),
            error,
        };
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}
