//! Fetch configuration.

use serde::Deserialize;

use crate::defaults;

const ENV_ALLOWED_EXTENSION: &str = "MODEL_FETCH_ALLOWED_EXTENSION";
const ENV_CHUNK_SIZE: &str = "MODEL_FETCH_CHUNK_SIZE";
const ENV_RESOURCE_KIND: &str = "MODEL_FETCH_RESOURCE_KIND";

/// Settings for the file and bundled readers.
///
/// The network client is process-wide and is not configured here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Extension (without the dot) a local file must carry
    pub allowed_extension: String,
    /// Read size when draining bundled resources
    pub chunk_size: usize,
    /// Resource kind bundled names are resolved under
    pub resource_kind: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            allowed_extension: defaults::allowed_extension(),
            chunk_size: defaults::chunk_size(),
            resource_kind: defaults::resource_kind(),
        }
    }
}

impl FetchConfig {
    /// Defaults overridden by `MODEL_FETCH_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(ext) = std::env::var(ENV_ALLOWED_EXTENSION) {
            let ext = ext.trim().trim_start_matches('.');
            if !ext.is_empty() {
                config.allowed_extension = ext.to_string();
            }
        }

        if let Ok(raw) = std::env::var(ENV_CHUNK_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(size) => config.chunk_size = size,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_CHUNK_SIZE, raw, e),
            }
        }

        if let Ok(kind) = std::env::var(ENV_RESOURCE_KIND) {
            if !kind.trim().is_empty() {
                config.resource_kind = kind.trim().to_string();
            }
        }

        config
    }

    /// Chunk size actually used for reads; never zero.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.max(1)
    }
}
