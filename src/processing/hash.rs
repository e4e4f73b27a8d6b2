//! Content hashing.
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Hex encoded SHA-256 digest.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Hash of the JSON serialization of `content`.
///
/// Maps must be sorted (`BTreeMap`) for the hash not to depend on insertion order.
pub fn content_hash<T: Serialize>(content: &T) -> Result<String, Error> {
    let bytes = serde_json::to_vec(content)?;
    Ok(sha256_hex(&bytes))
}
