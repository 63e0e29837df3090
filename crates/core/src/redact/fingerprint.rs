//! One-way fingerprints for filename identity.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const FINGERPRINT_LEN: usize = 6;

/// Full SHA-256 digest of a filename stem, hex-encoded.
pub fn stem_digest(stem: &str) -> String {
    hex::encode(Sha256::digest(stem.as_bytes()))
}

/// Short fingerprint of a filename stem.
///
/// Unsalted, so an unchanged file keeps its fingerprint across runs; only
/// the first few hex characters of the digest are kept.
pub fn fingerprint(stem: &str) -> String {
    let mut digest = stem_digest(stem);
    digest.truncate(FINGERPRINT_LEN);
    digest
}
