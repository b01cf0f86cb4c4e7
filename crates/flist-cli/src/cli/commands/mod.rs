//! CLI command handlers, one file per command.

mod extract;
mod fingerprint;
mod resolve;

pub use extract::run_extract;
pub use fingerprint::run_fingerprint;
pub use resolve::run_resolve;
