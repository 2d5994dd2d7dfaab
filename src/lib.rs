//! model-fetch - resolve a model identifier to the raw bytes of a model artifact.
//!
//! An identifier names a local file (`file://...`), a network resource (any other
//! `scheme://...`), or a resource bundled with the host application (anything else).

mod defaults;
pub mod error;

pub mod config;
pub mod fetcher;
pub mod host;
pub mod source;

pub use error::{Error, ErrorKind, Result};

pub use config::FetchConfig;
pub use fetcher::ModelFetcher;
pub use host::{DirectoryHost, HostHandle, ResourceHost, ResourceId, ResourceStream};
pub use source::ModelSource;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
