//! AES-256-CBC encryption/decryption of attribute values
//!
//! Each encrypt call generates a fresh random IV and emits
//! `base64(IV || ciphertext)`, so the output is a single self-contained
//! string that is safe to store in any text-oriented column. The layout
//! is a compatibility contract with previously stored data and must not
//! change.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::RngCore;
use tracing::warn;

use crate::error::FieldsealResult;

use super::key::CipherKey;

/// Size of the initialization vector in bytes
pub const IV_LENGTH: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypts and decrypts attribute values with a process-wide key.
///
/// The key is validated at construction, so an `Encrypter` is never usable
/// in a misconfigured state. `encrypt` and `decrypt` take `&self` and the
/// key is read-only after construction, so a shared instance (for example
/// behind an `Arc`) is safe to use from multiple threads.
#[derive(Debug)]
pub struct Encrypter {
    key: CipherKey,
}

impl Encrypter {
    /// Create an encrypter with the given key.
    ///
    /// Fails with a configuration error if the key is empty after trimming
    /// or longer than [`super::KEY_LENGTH`] bytes.
    pub fn new(key: &str) -> FieldsealResult<Self> {
        Ok(Self {
            key: CipherKey::parse(key)?,
        })
    }

    /// Replace the active key, validating the candidate first.
    ///
    /// The previous key stays in place if validation fails.
    pub fn set_key(&mut self, candidate: &str) -> FieldsealResult<()> {
        self.key = CipherKey::parse(candidate)?;
        Ok(())
    }

    /// Encrypt a plaintext string.
    ///
    /// Returns `base64(IV || ciphertext)`. A fresh 16-byte IV is drawn from
    /// the OS CSPRNG on every call, so encrypting the same plaintext twice
    /// yields different outputs. The empty string is valid input.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let mut iv = [0u8; IV_LENGTH];
        rand::rngs::OsRng.fill_bytes(&mut iv);

        let ciphertext = Aes256CbcEnc::new(self.key.as_bytes().into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        let mut payload = Vec::with_capacity(IV_LENGTH + ciphertext.len());
        payload.extend_from_slice(&iv);
        payload.extend_from_slice(&ciphertext);

        STANDARD.encode(payload)
    }

    /// Decrypt a string produced by [`Encrypter::encrypt`].
    ///
    /// Returns `None` if the input cannot be decrypted: malformed base64,
    /// a payload shorter than the IV, a padding mismatch (wrong key or
    /// corrupted ciphertext), or non-UTF-8 plaintext. Failures are logged
    /// without the input or key material; callers are expected to inspect
    /// the returned `Option` before trusting the value.
    pub fn decrypt(&self, encoded: &str) -> Option<String> {
        let decoded = match STANDARD.decode(encoded) {
            Ok(bytes) => bytes,
            Err(_) => {
                warn!("decryption failed: input is not valid base64");
                return None;
            }
        };

        if decoded.len() <= IV_LENGTH {
            warn!("decryption failed: payload shorter than IV plus one block");
            return None;
        }

        let (iv, ciphertext) = decoded.split_at(IV_LENGTH);
        let iv: [u8; IV_LENGTH] = iv.try_into().ok()?;

        let plaintext = match Aes256CbcDec::new(self.key.as_bytes().into(), (&iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        {
            Ok(bytes) => bytes,
            Err(_) => {
                warn!("decryption failed: bad padding, wrong key or corrupted ciphertext");
                return None;
            }
        };

        match String::from_utf8(plaintext) {
            Ok(plaintext) => Some(plaintext),
            Err(_) => {
                warn!("decryption failed: plaintext is not valid UTF-8");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_encrypter() -> Encrypter {
        Encrypter::new("0123456701234567").unwrap()
    }

    #[test]
    fn test_round_trip() {
        let encrypter = test_encrypter();
        let encoded = encrypter.encrypt("hello world");

        assert_eq!(encrypter.decrypt(&encoded), Some("hello world".to_string()));
    }

    #[test]
    fn test_round_trip_empty_string() {
        let encrypter = test_encrypter();
        let encoded = encrypter.encrypt("");

        assert!(!encoded.is_empty());
        assert_eq!(encrypter.decrypt(&encoded), Some(String::new()));
    }

    #[test]
    fn test_round_trip_unicode() {
        let encrypter = test_encrypter();
        let plaintext = "héllo wörld \u{1F512} привіт";
        let encoded = encrypter.encrypt(plaintext);

        assert_eq!(encrypter.decrypt(&encoded), Some(plaintext.to_string()));
    }

    #[test]
    fn test_same_plaintext_different_output() {
        let encrypter = test_encrypter();

        // Fresh IV per call: outputs are not comparable for equality
        assert_ne!(encrypter.encrypt("hello"), encrypter.encrypt("hello"));
    }

    #[test]
    fn test_output_layout() {
        let encrypter = test_encrypter();
        let encoded = encrypter.encrypt("hello world");

        // 16 IV bytes + 11 plaintext bytes padded to 16 = 32 raw bytes,
        // which base64 expands well past 24 characters
        assert!(encoded.len() >= 24);

        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 32);
    }

    #[test]
    fn test_decrypt_invalid_base64() {
        let encrypter = test_encrypter();
        assert_eq!(encrypter.decrypt("not-valid-base64!!"), None);
    }

    #[test]
    fn test_decrypt_payload_shorter_than_iv() {
        let encrypter = test_encrypter();
        let short = STANDARD.encode([0u8; 10]);
        assert_eq!(encrypter.decrypt(&short), None);
    }

    #[test]
    fn test_decrypt_with_wrong_key() {
        let encrypter = test_encrypter();
        let other = Encrypter::new("a completely different key").unwrap();

        let encoded = encrypter.encrypt("hello world");
        assert_ne!(other.decrypt(&encoded), Some("hello world".to_string()));
    }

    #[test]
    fn test_decrypt_truncated_ciphertext() {
        let encrypter = test_encrypter();
        let encoded = encrypter.encrypt("hello world");

        let mut decoded = STANDARD.decode(&encoded).unwrap();
        decoded.truncate(decoded.len() - 3);
        let truncated = STANDARD.encode(decoded);

        assert_eq!(encrypter.decrypt(&truncated), None);
    }

    #[test]
    fn test_set_key_replaces_active_key() {
        let mut encrypter = test_encrypter();
        let encoded = encrypter.encrypt("hello");

        encrypter.set_key("another key").unwrap();
        assert_eq!(encrypter.decrypt(&encrypter.encrypt("hello")), Some("hello".to_string()));
        assert_ne!(encrypter.decrypt(&encoded), Some("hello".to_string()));
    }

    #[test]
    fn test_set_key_rejects_invalid_candidate() {
        let mut encrypter = test_encrypter();
        assert!(encrypter.set_key("   ").is_err());

        // Previous key still active after a failed set_key
        let encoded = encrypter.encrypt("still works");
        assert_eq!(encrypter.decrypt(&encoded), Some("still works".to_string()));
    }

    #[test]
    fn test_key_is_trimmed_before_use() {
        let padded = Encrypter::new(" secret ").unwrap();
        let plain = Encrypter::new("secret").unwrap();

        let encoded = padded.encrypt("hello");
        assert_eq!(plain.decrypt(&encoded), Some("hello".to_string()));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let encrypter = Arc::new(test_encrypter());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let encrypter = Arc::clone(&encrypter);
                std::thread::spawn(move || {
                    let plaintext = format!("value-{}", i);
                    let encoded = encrypter.encrypt(&plaintext);
                    assert_eq!(encrypter.decrypt(&encoded), Some(plaintext));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
