//! Cryptographic functions for fieldseal
//!
//! Provides AES-256-CBC encryption of record attribute values with a
//! per-call random IV and a base64 transport encoding.

pub mod engine;
pub mod key;

pub use engine::{Encrypter, IV_LENGTH};
pub use key::{CipherKey, KEY_LENGTH};
