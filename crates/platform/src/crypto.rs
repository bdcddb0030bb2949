//! Cryptographic Utilities

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Alphabet for human-friendly one-time codes (uppercase alphanumeric)
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Generate an uppercase alphanumeric string of the given length.
///
/// Bytes that would bias the modulo reduction are rejected, so every
/// alphabet symbol is equally likely (~5.17 bits of entropy per character).
pub fn random_alphanumeric(len: usize) -> String {
    // Largest multiple of the alphabet size below 256
    let limit = (256 / CODE_ALPHABET.len()) * CODE_ALPHABET.len();
    let mut out = String::with_capacity(len);

    while out.len() < len {
        for byte in random_bytes(len) {
            if out.len() == len {
                break;
            }
            if (byte as usize) < limit {
                out.push(CODE_ALPHABET[byte as usize % CODE_ALPHABET.len()] as char);
            }
        }
    }

    out
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
