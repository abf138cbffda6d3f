//! Encryption key handling
//!
//! Validates operator-supplied key strings and expands them to the fixed
//! AES-256 key size. Key material is zeroed on drop.

use std::fmt;

use zeroize::ZeroizeOnDrop;

use crate::error::{FieldsealError, FieldsealResult};

/// Maximum key size in bytes (256-bit cipher key)
pub const KEY_LENGTH: usize = 32;

/// A validated AES-256 key.
///
/// Keys shorter than 32 bytes are zero-padded to the full key size, which
/// keeps values written by earlier OpenSSL-based deployments decryptable.
#[derive(Clone, ZeroizeOnDrop)]
pub struct CipherKey {
    bytes: [u8; KEY_LENGTH],
}

impl CipherKey {
    /// Parse and validate a candidate key string.
    ///
    /// Surrounding whitespace is trimmed before validation. The trimmed
    /// key must be non-empty and at most [`KEY_LENGTH`] bytes.
    pub fn parse(candidate: &str) -> FieldsealResult<Self> {
        let trimmed = candidate.trim();

        if trimmed.is_empty() {
            return Err(FieldsealError::Config(
                "encryption key length should be greater than 0".to_string(),
            ));
        }

        if trimmed.len() > KEY_LENGTH {
            return Err(FieldsealError::Config(format!(
                "encryption key length should not be greater than {}",
                KEY_LENGTH
            )));
        }

        let mut bytes = [0u8; KEY_LENGTH];
        bytes[..trimmed.len()].copy_from_slice(trimmed.as_bytes());

        Ok(Self { bytes })
    }

    /// Get the expanded 32-byte key
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }
}

// Don't print key material in Debug output
impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey").finish_non_exhaustive()
    }
}
