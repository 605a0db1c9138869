//! Checksum of a raw load export.

use sha2::{Digest, Sha256};

/// Hex SHA-256 of the export text, used to tell two uploads apart.
pub fn export_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
