//! Identifier-to-bytes fetching.

use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::host::HostHandle;
use crate::source::{bundled, file, network, ModelSource};

/// Fetches model bytes for an identifier from whichever source it names.
///
/// Holds no state between calls beyond a non-owning host handle and its config;
/// every call re-classifies and re-reads.
#[derive(Debug, Clone, Default)]
pub struct ModelFetcher {
    host: HostHandle,
    config: FetchConfig,
}

impl ModelFetcher {
    /// Create a fetcher with default config.
    pub fn new(host: HostHandle) -> Self {
        Self::with_config(host, FetchConfig::default())
    }

    /// Create a fetcher with custom config.
    pub fn with_config(host: HostHandle, config: FetchConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn host(&self) -> &HostHandle {
        &self.host
    }

    /// Fetch the full artifact named by `identifier`, blocking the calling thread.
    pub fn fetch(&self, identifier: &str) -> Result<Vec<u8>> {
        log::info!("Loading byte data from {}...", identifier);

        let result = ModelSource::classify(identifier).and_then(|source| {
            log::debug!("Classified {:?} as {}", identifier, source);
            self.fetch_source(&source)
        });

        match &result {
            Ok(data) => log::info!("Loaded {} bytes from {}", data.len(), identifier),
            Err(e) => log::error!("Failed to load {} [{}]: {}", identifier, e.kind(), e),
        }
        result
    }

    /// Fetch from an already classified source.
    pub fn fetch_source(&self, source: &ModelSource) -> Result<Vec<u8>> {
        match source {
            ModelSource::File { path } => file::read_file(path, &self.config.allowed_extension),
            ModelSource::Network { url } => network::fetch_url(url),
            ModelSource::Bundled { name } => bundled::read_resource(
                &self.host,
                name,
                &self.config.resource_kind,
                self.config.effective_chunk_size(),
            ),
        }
    }

    /// Run [`fetch`](Self::fetch) on the tokio blocking pool.
    pub async fn fetch_async(&self, identifier: impl Into<String>) -> Result<Vec<u8>> {
        let fetcher = self.clone();
        let identifier = identifier.into();
        let target = identifier.clone();

        tokio::task::spawn_blocking(move || fetcher.fetch(&identifier))
            .await
            .map_err(|e| Error::transport(target, "Fetch task did not complete", Some(Box::new(e))))?
    }
}
