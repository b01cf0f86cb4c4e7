//! Template maps: ordered destination-path patterns paired with source URLs.

mod load;
mod placeholder;

pub use placeholder::{placeholders_in, render, Placeholder};

/// One `template path → source URL` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub template_path: String,
    pub source_url: String,
}

impl TemplateEntry {
    pub fn new(template_path: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            template_path: template_path.into(),
            source_url: source_url.into(),
        }
    }
}

/// Insertion-ordered list of template entries.
///
/// Repeated template paths are kept as separate entries; the resolver decides
/// which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMap {
    entries: Vec<TemplateEntry>,
}

impl TemplateMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, template_path: impl Into<String>, source_url: impl Into<String>) {
        self.entries.push(TemplateEntry::new(template_path, source_url));
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Into<String>, U: Into<String>> FromIterator<(P, U)> for TemplateMap {
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(p, u)| TemplateEntry::new(p, u))
                .collect(),
        }
    }
}
