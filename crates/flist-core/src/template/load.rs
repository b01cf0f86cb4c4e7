//! Loading template maps from JSON or TOML documents.
//!
//! Deserialization walks the document's map in order, so entry order (and, in
//! JSON, repeated keys) survives without an ordered-map dependency.

use anyhow::{Context, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

use super::TemplateMap;
use crate::error::ResolveError;

struct TemplateMapVisitor;

impl<'de> Visitor<'de> for TemplateMapVisitor {
    type Value = TemplateMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of destination path templates to URL strings")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<TemplateMap, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TemplateMap::new();
        while let Some((path, url)) = access.next_entry::<String, String>()? {
            map.push(path, url);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for TemplateMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TemplateMapVisitor)
    }
}

impl TemplateMap {
    /// Parses a JSON object of `template path → URL`.
    pub fn from_json_str(s: &str) -> std::result::Result<Self, ResolveError> {
        serde_json::from_str(s).map_err(|e| ResolveError::InvalidInput {
            message: e.to_string(),
        })
    }

    /// Parses a TOML table of `template path → URL`.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ResolveError> {
        toml::from_str(s).map_err(|e| ResolveError::InvalidInput {
            message: e.to_string(),
        })
    }

    /// Reads a template map file; `.toml` files are TOML, anything else JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read template map: {}", path.display()))?;
        let is_toml = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let map = if is_toml {
            Self::from_toml_str(&data)
        } else {
            Self::from_json_str(&data)
        };
        map.with_context(|| format!("parse template map: {}", path.display()))
    }
}
