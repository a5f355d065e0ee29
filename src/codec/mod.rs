//! Hex and Base64 transcoding helpers.
//!
//! Thin wrappers over the `hex` and `base64` crates that normalize their
//! failure types onto [`Error::InvalidEncoding`], so callers moving keys,
//! signatures and ciphertexts through textual channels deal with a single
//! error surface.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Encodes bytes as lowercase hex.
pub fn hex_encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes a hex string (either case).
///
/// # Errors
/// `InvalidEncoding` for odd-length input or non-hex characters.
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|_| Error::InvalidEncoding)
}

/// Encodes bytes as standard Base64 with padding.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes standard padded Base64.
///
/// # Errors
/// `InvalidEncoding` for malformed input.
pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|_| Error::InvalidEncoding)
}
