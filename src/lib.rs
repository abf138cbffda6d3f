//! fieldseal - Transparent field-level encryption for persisted records
//!
//! This library encrypts selected record attributes before they are written
//! to storage and decrypts them after they are read back, without the
//! surrounding application code calling encryption routines explicitly.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `crypto`: The AES-256-CBC encryption engine
//! - `record`: The record seam and the attribute encryption behavior
//! - `cli`: Handlers for the `fieldseal` binary
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use fieldseal::crypto::Encrypter;
//! use fieldseal::record::{EncryptionBehavior, LifecycleEvent, MemoryRecord};
//!
//! # fn main() -> fieldseal::FieldsealResult<()> {
//! let engine = Arc::new(Encrypter::new("0123456701234567")?);
//! let behavior = EncryptionBehavior::attached(engine, vec!["email".to_string()]);
//!
//! let mut record = MemoryRecord::with_attributes([("email", "user@example.com")]);
//! behavior.apply(LifecycleEvent::BeforeInsert, &mut record)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod record;

pub use crypto::{Encrypter, IV_LENGTH, KEY_LENGTH};
pub use error::{FieldsealError, FieldsealResult};
pub use record::{AttributeRecord, EncryptionBehavior, LifecycleEvent, MemoryRecord};
