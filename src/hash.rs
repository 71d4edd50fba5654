use sha1::{Digest, Sha1};

use crate::constants::hashing::{HASH_MODULUS_MAX, PERCENT_SCALE};

/// SHA-1 digest of `bytes` reduced modulo `i64::MAX + 1`.
///
/// The digest is read as a big-endian integer, so the reduction keeps its low
/// 63 bits. The modulus is fixed at 64-bit width on every host.
pub fn stable_hash_bytes(bytes: &[u8]) -> u64 {
    let digest = Sha1::digest(bytes);
    let mut tail = [0u8; 8];
    let start = digest.len() - tail.len();
    tail.copy_from_slice(&digest[start..]);
    u64::from_be_bytes(tail) & HASH_MODULUS_MAX
}

/// Map `bytes` to a stable pseudo-percentage in `0.0..=100.0`.
pub fn stable_percentage(bytes: &[u8]) -> f64 {
    stable_hash_bytes(bytes) as f64 * (PERCENT_SCALE / HASH_MODULUS_MAX as f64)
}
