//! File integrity helpers.
//!
//! Content hashes are SHA-256 digests encoded as lowercase hex. Stored
//! digests elsewhere depend on that exact encoding, so it must not change.

mod hash;

pub use hash::{compute_bytes_hash, compute_hash, get_file_hash};

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum IntegrityError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Check that something is present at `path`.
///
/// Fails with the underlying IO error (not found, permission denied, ...).
pub fn probe_file(path: &Path) -> io::Result<()> {
    std::fs::metadata(path).map(|_| ())
}

/// Returns `true` if `path` can be accessed, `false` on any failure.
///
/// This is the only helper that turns an IO error into a plain value.
pub fn check_file_exists(path: &Path) -> bool {
    match probe_file(path) {
        Ok(()) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "File is not accessible");
            false
        }
    }
}

/// Compare a previously stored digest against the file's current content.
pub fn file_matches_hash(path: &Path, expected: &str) -> Result<bool, IntegrityError> {
    let actual = get_file_hash(path)?;
    Ok(actual.eq_ignore_ascii_case(expected.trim()))
}
