//! Filesystem-backed resource host.
//!
//! Layout: `<root>/<kind>/<name>.<ext>`. A resource is addressed by its file stem, so
//! `<root>/raw/mobilenet.tflite` resolves as name `mobilenet` of kind `raw`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{ResourceHost, ResourceId, ResourceStream};

/// Resource host serving files from a directory tree.
///
/// The tree is indexed once at construction; ids stay stable for the life of the host.
#[derive(Debug)]
pub struct DirectoryHost {
    package: String,
    root: PathBuf,
    index: HashMap<(String, String), ResourceId>,
    paths: Vec<PathBuf>,
}

impl DirectoryHost {
    /// Index every `<root>/<kind>/<file>` under `root`.
    pub fn open(root: impl Into<PathBuf>, package: impl Into<String>) -> io::Result<Self> {
        let root = root.into();
        let mut host = Self {
            package: package.into(),
            root,
            index: HashMap::new(),
            paths: Vec::new(),
        };

        let mut kinds: Vec<PathBuf> = fs::read_dir(&host.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_dir())
            .collect();
        kinds.sort();

        for kind_dir in kinds {
            let Some(kind) = file_name(&kind_dir) else {
                continue;
            };

            let mut files: Vec<PathBuf> = fs::read_dir(&kind_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            files.sort();

            for path in files {
                let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let key = (kind.clone(), stem.to_string());
                if host.index.contains_key(&key) {
                    log::warn!(
                        "Duplicate resource {}/{} ignored: {}",
                        key.0,
                        key.1,
                        path.display()
                    );
                    continue;
                }
                // Zero is reserved as "no resource".
                let id = ResourceId(host.paths.len() as u32 + 1);
                host.index.insert(key, id);
                host.paths.push(path);
            }
        }

        log::debug!(
            "Indexed {} resources under {}",
            host.paths.len(),
            host.root.display()
        );
        Ok(host)
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of indexed resources.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    fn path_of(&self, id: ResourceId) -> Option<&PathBuf> {
        let index = usize::try_from(id.0).ok()?.checked_sub(1)?;
        self.paths.get(index)
    }
}

impl ResourceHost for DirectoryHost {
    fn package_name(&self) -> &str {
        &self.package
    }

    fn resource_id(&self, name: &str, kind: &str, package: &str) -> Option<ResourceId> {
        if package != self.package {
            return None;
        }
        self.index
            .get(&(kind.to_string(), name.to_string()))
            .copied()
    }

    fn open_resource(&self, id: ResourceId) -> io::Result<ResourceStream> {
        let path = self.path_of(id).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("Unknown resource id {}", id.0))
        })?;
        Ok(Box::new(io::BufReader::new(fs::File::open(path)?)))
    }

    fn resource_length(&self, id: ResourceId) -> Option<u64> {
        self.path_of(id)
            .and_then(|p| fs::metadata(p).ok())
            .map(|m| m.len())
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
}
