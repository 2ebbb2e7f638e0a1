//! Content fingerprint for change detection.

use sha2::{Digest, Sha256};

/// SHA-256 of the raw body as lowercase hex.
///
/// The bytes are hashed as received; no decoding or normalization happens
/// first, so two bodies share a hash only if they are byte-identical.
pub fn page_hash(body: &[u8]) -> String {
    hex::encode(Sha256::digest(body))
}
