//! Host application environment used to look up bundled resources.
//!
//! The host is owned by the embedding application. This crate only ever holds a
//! [`HostHandle`], which does not keep the host alive.

pub mod directory;

pub use directory::DirectoryHost;

use std::io::Read;
use std::sync::{Arc, Weak};

/// Identifier of a resolved bundled resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

/// Byte stream over a bundled resource.
pub type ResourceStream = Box<dyn Read + Send>;

/// Bundled-resource lookup provided by the host application.
pub trait ResourceHost: Send + Sync {
    /// Namespace the host's own resources live in.
    fn package_name(&self) -> &str;

    /// Resolve `name` of the given `kind` within `package`.
    fn resource_id(&self, name: &str, kind: &str, package: &str) -> Option<ResourceId>;

    /// Open a stream over a resolved resource.
    fn open_resource(&self, id: ResourceId) -> std::io::Result<ResourceStream>;

    /// Length of the resource, if the host knows it up front.
    fn resource_length(&self, _id: ResourceId) -> Option<u64> {
        None
    }
}

/// Non-owning handle to the host.
///
/// Callers must go through [`HostHandle::get`], which fails once the host has been dropped.
#[derive(Clone)]
pub struct HostHandle {
    inner: Weak<dyn ResourceHost>,
}

impl HostHandle {
    /// Create a handle that observes `host` without extending its lifetime.
    pub fn new<H: ResourceHost + 'static>(host: &Arc<H>) -> Self {
        let host: Arc<dyn ResourceHost> = host.clone();
        Self {
            inner: Arc::downgrade(&host),
        }
    }

    /// A handle with no host behind it. Bundled fetches through it always fail.
    pub fn detached() -> Self {
        Self {
            inner: Weak::<DirectoryHost>::new(),
        }
    }

    /// Whether the host is still alive.
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Borrow the host for the duration of one operation.
    pub fn get(&self) -> Option<Arc<dyn ResourceHost>> {
        self.inner.upgrade()
    }
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

impl Default for HostHandle {
    fn default() -> Self {
        Self::detached()
    }
}
