//! Deterministic fingerprints for `&` placeholders and fallback names.
//!
//! SHA-256 of the URL string, lowercase hex. Two resolutions of the same map must
//! produce the same names, so nothing here may depend on time or randomness.

use sha2::{Digest, Sha256};

/// Default fingerprint width in hex characters (32 bits).
pub const DEFAULT_FINGERPRINT_LEN: usize = 8;
/// Narrowest accepted width; below this distinct URLs collide too easily.
pub const MIN_FINGERPRINT_LEN: usize = 4;
/// Widest accepted width.
pub const MAX_FINGERPRINT_LEN: usize = 128;

const DIGEST_HEX_LEN: usize = 64;

/// Returns the first `length` hex characters of the URL's fingerprint.
///
/// `length` goes through [`clamp_fingerprint_len`]. Widths beyond one digest are
/// filled by hashing the URL again with a block counter, so longer fingerprints
/// extend shorter ones instead of changing them.
pub fn fingerprint(url: &str, length: usize) -> String {
    let length = clamp_fingerprint_len(length);

    let mut out = hex::encode(Sha256::digest(url.as_bytes()));
    let mut block: u64 = 1;
    while out.len() < length {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hasher.update(block.to_be_bytes());
        out.push_str(&hex::encode(hasher.finalize()));
        block += 1;
    }
    out.truncate(length);
    out
}

/// `0` means [`DEFAULT_FINGERPRINT_LEN`]; anything else is clamped to
/// `MIN_FINGERPRINT_LEN..=MAX_FINGERPRINT_LEN`.
pub fn clamp_fingerprint_len(length: usize) -> usize {
    if length == 0 {
        DEFAULT_FINGERPRINT_LEN
    } else {
        length.clamp(MIN_FINGERPRINT_LEN, MAX_FINGERPRINT_LEN)
    }
}

/// Fingerprint with the default width.
pub fn fingerprint_default(url: &str) -> String {
    fingerprint(url, DEFAULT_FINGERPRINT_LEN)
}
