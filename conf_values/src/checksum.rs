//! Deterministic content digests for change detection.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `data` as lowercase hex.
#[must_use]
pub fn checksum_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
