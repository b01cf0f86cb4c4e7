pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod resolver;
pub mod template;
pub mod url_model;

pub use error::{EntryWarning, ResolveError};
pub use fingerprint::fingerprint;
pub use resolver::{resolve, resolve_all, Resolution, ResolveOptions, ResolvedMap};
pub use template::{Placeholder, TemplateEntry, TemplateMap};
pub use url_model::{extract, FileNameInfo};
