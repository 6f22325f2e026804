/// Title hashing.
use sha2::{Digest, Sha256};

/// Length in characters of every digest returned by [`digest`].
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 over the UTF-8 bytes of `text`, as lowercase hex.
pub fn digest(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    format!("{hash:x}")
}
