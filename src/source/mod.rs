//! Model sources and identifier classification.
//!
//! An identifier is one of:
//! - `file://...` - a local model file (percent-decoded path component)
//! - `<scheme>://...` - any other URI, fetched over the network verbatim
//! - anything else - the name of a resource bundled with the host application

pub mod bundled;
pub mod file;
pub mod network;

use std::path::PathBuf;

use reqwest::Url;

use crate::defaults::{FILE_SCHEME, SCHEME_SEPARATOR};
use crate::error::{Error, Result};

/// Where a model's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Local file
    File { path: PathBuf },
    /// Remote resource
    Network { url: String },
    /// Resource bundled with the host, resolved at fetch time
    Bundled { name: String },
}

impl ModelSource {
    /// Classify an identifier. Performs no I/O.
    ///
    /// Only a `file://` URI without a path component is rejected.
    pub fn classify(identifier: &str) -> Result<Self> {
        if !identifier.contains(SCHEME_SEPARATOR) {
            return Ok(Self::Bundled {
                name: identifier.to_string(),
            });
        }

        // Scheme is everything before the first ':', matched exactly.
        let scheme_end = identifier.find(':').unwrap_or_default();
        if &identifier[..scheme_end] != FILE_SCHEME {
            return Ok(Self::Network {
                url: identifier.to_string(),
            });
        }

        let path = file_path(identifier, &identifier[scheme_end + 1..])?;
        Ok(Self::File { path })
    }

    /// Short label for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::File { .. } => "file",
            Self::Network { .. } => "network",
            Self::Bundled { .. } => "bundled",
        }
    }
}

/// Percent-decoded path component of a `file:` URI, ignoring any authority.
fn file_path(identifier: &str, scheme_specific: &str) -> Result<PathBuf> {
    let hierarchical = scheme_specific
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let raw_path = match hierarchical.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map(|start| &authority_and_path[start..]),
        None => hierarchical.starts_with('/').then_some(hierarchical),
    };
    let raw_path = raw_path
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::invalid_input(identifier, "File path cannot be empty"))?;

    let local = Url::parse(&format!("{}://{}", FILE_SCHEME, raw_path))
        .map_err(|e| Error::invalid_input(identifier, format!("Malformed file URI: {}", e)))?;
    local
        .to_file_path()
        .map_err(|()| Error::invalid_input(identifier, "File URI has no local path"))
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File { path } => write!(f, "file {}", path.display()),
            Self::Network { url } => write!(f, "url {}", url),
            Self::Bundled { name } => write!(f, "resource {}", name),
        }
    }
}
