//! File-based value resolution.

use std::fs::File;
use std::io::Read;

use crate::core::env::SecretBinding;
use crate::error::{Error, Result};

/// Read the file a binding points at and trim the content.
///
/// The handle is released on every exit path. Only leading and trailing
/// whitespace (including trailing newlines, the common case for mounted
/// secret files) is stripped; interior content is preserved verbatim.
///
/// # Errors
///
/// Returns `FileOpen` when the path cannot be opened and `FileRead` when
/// reading fails mid-stream. Both carry the offending key and path.
pub fn resolve(binding: &SecretBinding) -> Result<String> {
    let mut file = File::open(&binding.path).map_err(|source| Error::FileOpen {
        key: binding.source_key.clone(),
        path: binding.path.clone(),
        source,
    })?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf).map_err(|source| Error::FileRead {
        key: binding.source_key.clone(),
        path: binding.path.clone(),
        source,
    })?;

    // Secret files are not required to be valid UTF-8
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}
