//! Insertion-ordered output table of concrete path → source URL.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Concrete destination paths mapped to their source URLs, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ResolvedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `path`. An overwritten key keeps its original
    /// position; the previous URL is returned.
    pub fn insert(&mut self, path: String, url: String) -> Option<String> {
        match self.index.get(&path) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, url)),
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, url));
                None
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.index.get(path).map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResolvedMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, url) in &self.entries {
            map.serialize_entry(path, url)?;
        }
        map.end()
    }
}
