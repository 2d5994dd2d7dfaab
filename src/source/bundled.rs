//! Reading resources bundled with the host application.

use std::io::{self, Read};

use crate::error::{Error, Result};
use crate::host::HostHandle;

/// Resolve `name` in the host's own namespace and read the resource in full.
///
/// The host is checked for liveness before any lookup. The stream is drained in
/// `chunk_size` reads since its length is not known in advance.
pub fn read_resource(
    host: &HostHandle,
    name: &str,
    kind: &str,
    chunk_size: usize,
) -> Result<Vec<u8>> {
    let host = host.get().ok_or(Error::ContextDestroyed)?;

    let id = host
        .resource_id(name, kind, host.package_name())
        .ok_or_else(|| Error::not_found(name, None))?;
    log::debug!("Resolved resource {} to id {}", name, id.0);

    let mut stream = host
        .open_resource(id)
        .map_err(|e| Error::not_found(name, Some(e)))?;

    let data = drain(&mut stream, chunk_size).map_err(|e| {
        Error::transport(name, "Failed to read resource", Some(Box::new(e)))
    })?;

    if let Some(expected) = host.resource_length(id) {
        if data.len() as u64 != expected {
            return Err(Error::transport(
                name,
                format!(
                    "Could not completely read resource ({} of {} bytes)",
                    data.len(),
                    expected
                ),
                None,
            ));
        }
    }

    Ok(data)
}

/// Accumulate `reader` into a buffer, `chunk_size` bytes at a time, until end of input.
fn drain<R: Read + ?Sized>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut data = Vec::new();
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(data),
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
