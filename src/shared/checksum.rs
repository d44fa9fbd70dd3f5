//! Content hashing. Manifest entries and drift checks compare hex SHA-256.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the given content.
pub fn sha256_hex(content: &str) -> String {
    use std::fmt::Write;

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // write! to a String cannot fail
        let _ = write!(out, "{byte:02x}");
    }
    out
}
