use super::IntegrityError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Compute SHA-256 hash of a string
pub fn compute_hash(content: &str) -> String {
    compute_bytes_hash(content.as_bytes())
}

/// Compute SHA-256 hash of raw bytes, as lowercase hex
pub fn compute_bytes_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Compute SHA-256 hash of a file's contents.
///
/// The file is read in full with a blocking call. Any read failure is
/// returned as [`IntegrityError::Io`]; there is no fallback digest.
pub fn get_file_hash(path: &Path) -> Result<String, IntegrityError> {
    let content = fs::read(path).map_err(|source| IntegrityError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(compute_bytes_hash(&content))
}
