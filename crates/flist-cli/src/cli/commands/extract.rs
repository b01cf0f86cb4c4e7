//! `flist extract <url>` – show how a URL's file name is derived.

use anyhow::Result;
use flist_core::url_model;

pub fn run_extract(url: &str) -> Result<()> {
    let info = url_model::extract(url)?;
    println!("file name: {}", info.full_name);
    println!("base name: {}", info.base_name);
    println!(
        "extension: {}",
        info.extension.as_deref().unwrap_or("(none)")
    );
    Ok(())
}
