//! Environment snapshot, secret-file scanning, and mutation.
//!
//! The process environment is captured once at startup into an explicit
//! [`Environment`] value. Resolved secrets are staged as overrides on that
//! value rather than written back through `std::env::set_var`, and the
//! launcher applies them to the child at spawn time. The child observes
//! exactly what in-place mutation would have produced, without any global
//! mutable state.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Reserved suffix marking a variable as a secret-file pointer.
pub const FILE_SUFFIX: &str = "_FILE";

/// A `_FILE` variable selected for resolution.
///
/// `derived_key` is `source_key` with the trailing suffix stripped; the
/// scanner never produces a binding with an empty derived key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretBinding {
    /// Original suffixed variable name (e.g. `DATABASE_URL_FILE`)
    pub source_key: String,
    /// The variable's value, interpreted as a filesystem path
    pub path: String,
    /// Variable name the resolved content will be bound to
    pub derived_key: String,
}

/// Snapshot of the process environment plus staged overrides.
pub struct Environment {
    snapshot: Vec<(String, String)>,
    overrides: BTreeMap<String, String>,
}

impl Environment {
    /// Capture the current process environment.
    ///
    /// Entries whose key or value is not valid UTF-8, or whose key is
    /// empty, are skipped without error; the child still inherits them
    /// directly from the OS. The snapshot is sorted by key so scanning
    /// order is deterministic across platforms.
    pub fn capture() -> Self {
        let mut snapshot: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        snapshot.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            snapshot,
            overrides: BTreeMap::new(),
        }
    }

    /// Candidate secret-file bindings, ordered by source key.
    ///
    /// Selects entries whose key ends, case-insensitively, in `_FILE`.
    /// A key that is nothing but the suffix would derive an empty
    /// variable name and is skipped. On derived-key collisions (suffix
    /// casing variants of the same name) the ordering makes the
    /// lexicographically last source key win.
    pub fn bindings(&self) -> Vec<SecretBinding> {
        self.snapshot
            .iter()
            .filter_map(|(key, value)| {
                let split = key.len().checked_sub(FILE_SUFFIX.len())?;
                if !key.is_char_boundary(split) {
                    return None;
                }
                let (derived, suffix) = key.split_at(split);
                if derived.is_empty() || !suffix.eq_ignore_ascii_case(FILE_SUFFIX) {
                    return None;
                }
                Some(SecretBinding {
                    source_key: key.clone(),
                    path: value.clone(),
                    derived_key: derived.to_string(),
                })
            })
            .collect()
    }

    /// Stage a variable for the child's environment, silently
    /// overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns `EnvSet` when the platform would reject the pair: an
    /// empty key, `=` or NUL in the key, or NUL in the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains('=') || key.contains('\0') {
            return Err(Error::EnvSet {
                key: key.to_string(),
                reason: "invalid character in variable name".to_string(),
            });
        }
        if value.contains('\0') {
            return Err(Error::EnvSet {
                key: key.to_string(),
                reason: "NUL byte in value".to_string(),
            });
        }

        self.overrides.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Staged overrides, to be applied on top of the inherited
    /// environment at spawn time.
    pub fn overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
