//! Default values for source classification and reading.

/// Separator that marks an identifier as a URI.
pub const SCHEME_SEPARATOR: &str = "://";
/// The only scheme treated as a local file.
pub const FILE_SCHEME: &str = "file";
/// The only extension accepted for local model files (compared case-insensitively).
pub const ALLOWED_EXTENSION: &str = "tflite";
/// Read size used when draining bundled resources.
pub const CHUNK_SIZE: usize = 2048;
/// Resource kind bundled models are registered under.
pub const RESOURCE_KIND: &str = "raw";
pub const USER_AGENT: &str = concat!("model-fetch/", env!("CARGO_PKG_VERSION"));

pub fn allowed_extension() -> String { ALLOWED_EXTENSION.to_string() }
pub fn chunk_size() -> usize { CHUNK_SIZE }
pub fn resource_kind() -> String { RESOURCE_KIND.to_string() }
