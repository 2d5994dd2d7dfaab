use std::path::{Path, PathBuf};
use std::sync::Arc;

use model_fetch::{DirectoryHost, HostHandle, ModelFetcher};

pub(crate) const PACKAGE: &str = "com.example.vision";

pub(crate) struct TestFixture {
    pub(crate) dir: tempfile::TempDir,
    pub(crate) host: Arc<DirectoryHost>,
    pub(crate) fetcher: ModelFetcher,
}

/// Deterministic pseudo-model content of `len` bytes.
pub(crate) fn model_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 7 + 3) % 256) as u8).collect()
}

pub(crate) fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// A temp dir holding `raw/<name>` resources plus a fetcher bound to a host over it.
pub(crate) fn make_fixture(resources: &[(&str, Vec<u8>)]) -> TestFixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let raw = dir.path().join("raw");
    std::fs::create_dir_all(&raw).expect("Failed to create raw dir");
    for (file_name, content) in resources {
        std::fs::write(raw.join(file_name), content).expect("Failed to write resource");
    }

    let host = Arc::new(DirectoryHost::open(dir.path(), PACKAGE).expect("Failed to index host"));
    let fetcher = ModelFetcher::new(HostHandle::new(&host));

    TestFixture { dir, host, fetcher }
}

impl TestFixture {
    /// Write a file outside the resource tree and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}
