//! `flist fingerprint <url>` – print a URL's fingerprint.

use flist_core::fingerprint;

pub fn run_fingerprint(url: &str, length: usize) {
    println!("{}", fingerprint::fingerprint(url, length));
}
