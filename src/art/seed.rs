/// Digest to seed conversion.
use crate::error::InputError;

/// Number of leading hex characters that make up a seed.
pub const SEED_HEX_LEN: usize = 8;

/// Parse the first eight hex characters of `hex` as a big-endian `u32`.
///
/// Shorter input is rejected instead of padded, so a truncated digest can
/// never quietly produce a different image.
pub fn seed_from(hex: &str) -> Result<u32, InputError> {
    let Some(prefix) = hex.get(..SEED_HEX_LEN) else {
        // Long enough in bytes means a multibyte char crosses the boundary.
        if hex.len() >= SEED_HEX_LEN {
            return Err(InputError::MalformedDigest {
                prefix: hex.chars().take(SEED_HEX_LEN).collect(),
            });
        }
        return Err(InputError::ShortDigest {
            needed: SEED_HEX_LEN,
            got: hex.chars().count(),
        });
    };
    if !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(InputError::MalformedDigest {
            prefix: prefix.to_string(),
        });
    }
    u32::from_str_radix(prefix, 16).map_err(|_| InputError::MalformedDigest {
        prefix: prefix.to_string(),
    })
}
