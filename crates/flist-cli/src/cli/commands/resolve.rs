//! `flist resolve <files>...` – resolve template maps and print JSON.

use anyhow::{Context, Result};
use flist_core::{resolve_all, ResolveOptions, ResolvedMap, TemplateMap};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct SectionOutput<'a> {
    source: String,
    files: &'a ResolvedMap,
}

/// Resolves every file as its own section. One file prints its flat map;
/// several print an array of `{ source, files }`. Warnings go to stderr.
pub fn run_resolve(files: &[PathBuf], options: &ResolveOptions) -> Result<()> {
    let maps = files
        .iter()
        .map(|path| TemplateMap::load(path))
        .collect::<Result<Vec<_>>>()?;

    let resolutions = resolve_all(&maps, options);

    for (path, resolution) in files.iter().zip(&resolutions) {
        for warning in &resolution.warnings {
            eprintln!("warning: {}: {}", path.display(), warning);
        }
    }

    let json = if let [only] = resolutions.as_slice() {
        serde_json::to_string_pretty(&only.map)
    } else {
        let sections: Vec<SectionOutput<'_>> = files
            .iter()
            .zip(&resolutions)
            .map(|(path, r)| SectionOutput {
                source: path.display().to_string(),
                files: &r.map,
            })
            .collect();
        serde_json::to_string_pretty(&sections)
    }
    .context("serialize resolved map")?;

    println!("{json}");
    Ok(())
}
