//! Local model file reading.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Read a local model file in full.
///
/// The file must exist, be readable, and carry `allowed_extension` (case-insensitive).
/// The returned buffer is exactly as long as the file was when it was opened; a shorter
/// read is an error rather than a partial result.
pub fn read_file(path: &Path, allowed_extension: &str) -> Result<Vec<u8>> {
    let target = path.display().to_string();

    let mut file = File::open(path).map_err(|e| Error::not_found(&target, Some(e)))?;
    let metadata = file
        .metadata()
        .map_err(|e| Error::not_found(&target, Some(e)))?;
    if !metadata.is_file() {
        return Err(Error::not_found(&target, None));
    }

    if !has_extension(path, allowed_extension) {
        return Err(Error::SecurityViolation {
            path: path.to_path_buf(),
            allowed: allowed_extension.to_string(),
        });
    }

    let expected = buffer_len(metadata.len())
        .ok_or_else(|| Error::invalid_input(&target, "File is too large to read into memory"))?;

    log::debug!("Reading {} bytes from {}", expected, target);
    read_exact_len(&mut file, expected, &target)
}

/// Read exactly `expected` bytes from `reader`. Fewer bytes is a transport failure.
fn read_exact_len<R: Read>(reader: &mut R, expected: usize, target: &str) -> Result<Vec<u8>> {
    let mut data = vec![0u8; expected];
    let read = read_full(reader, &mut data)
        .map_err(|e| Error::transport(target, "Failed to read file", Some(Box::new(e))))?;

    if read != expected {
        return Err(Error::transport(
            target,
            format!("Could not completely read file ({} of {} bytes)", read, expected),
            None,
        ));
    }

    Ok(data)
}

fn has_extension(path: &Path, allowed: &str) -> bool {
    let allowed = allowed.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(allowed))
}

/// Largest file that fits in a single allocation on this platform.
fn buffer_len(len: u64) -> Option<usize> {
    usize::try_from(len)
        .ok()
        .filter(|&len| len <= isize::MAX as usize)
}

/// Fill `buf` until it is full or the reader hits end of input. Returns bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
