//! Attribute encryption behavior
//!
//! Attaches encrypt-on-write / decrypt-on-read behavior to a persisted
//! record without the record's business logic knowing about encryption.
//!
//! The host framework forwards each lifecycle notification to
//! [`EncryptionBehavior::apply`] together with the record being persisted
//! or loaded:
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
//! // record now holds ciphertext; the framework writes it out
//! behavior.apply(LifecycleEvent::AfterInsert, &mut record)?;
//! // record holds plaintext again
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::crypto::Encrypter;
use crate::error::{FieldsealError, FieldsealResult};

use super::{AttributeRecord, LifecycleEvent};

/// Encrypts configured attributes before writes and decrypts them after
/// reads.
///
/// The attribute list is fixed when the behavior is attached. The engine
/// reference is injected explicitly; a behavior without one fails every
/// notification with a configuration error.
pub struct EncryptionBehavior {
    attributes: Vec<String>,
    engine: Option<Arc<Encrypter>>,
}

impl EncryptionBehavior {
    /// Create a behavior for the given attributes with no engine yet.
    ///
    /// Use [`EncryptionBehavior::with_engine`] to inject one; until then
    /// every notification fails with a configuration error.
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            engine: None,
        }
    }

    /// Inject the encryption engine
    pub fn with_engine(mut self, engine: Arc<Encrypter>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Create a behavior with the engine already attached
    pub fn attached<I, S>(engine: Arc<Encrypter>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(attributes).with_engine(engine)
    }

    /// The attribute names this behavior transforms, in processing order
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The lifecycle notifications this behavior subscribes to
    pub fn events(&self) -> [LifecycleEvent; 5] {
        [
            LifecycleEvent::AfterFind,
            LifecycleEvent::BeforeInsert,
            LifecycleEvent::BeforeUpdate,
            LifecycleEvent::AfterInsert,
            LifecycleEvent::AfterUpdate,
        ]
    }

    /// Handle a lifecycle notification for the given record.
    ///
    /// Before a write the configured attributes are encrypted in place;
    /// after a find or a completed write they are decrypted in place, so
    /// the in-memory record always ends up holding plaintext.
    pub fn apply(
        &self,
        event: LifecycleEvent,
        record: &mut dyn AttributeRecord,
    ) -> FieldsealResult<()> {
        match event {
            LifecycleEvent::BeforeInsert | LifecycleEvent::BeforeUpdate => {
                self.encrypt_all_attributes(record)
            }
            LifecycleEvent::AfterFind
            | LifecycleEvent::AfterInsert
            | LifecycleEvent::AfterUpdate => self.decrypt_all_attributes(record),
        }
    }

    /// Encrypt all configured attributes in place
    pub fn encrypt_all_attributes(&self, record: &mut dyn AttributeRecord) -> FieldsealResult<()> {
        let engine = self.engine()?;

        for name in &self.attributes {
            if let Some(value) = record.get_attribute(name) {
                record.set_attribute(name, Some(engine.encrypt(&value)));
            }
        }

        Ok(())
    }

    /// Decrypt all configured attributes in place.
    ///
    /// An attribute that fails to decrypt is set to `None` and processing
    /// continues, so one corrupted field does not abort a batch read.
    pub fn decrypt_all_attributes(&self, record: &mut dyn AttributeRecord) -> FieldsealResult<()> {
        let engine = self.engine()?;

        for name in &self.attributes {
            if let Some(value) = record.get_attribute(name) {
                record.set_attribute(name, engine.decrypt(&value));
            }
        }

        Ok(())
    }

    /// Get the injected engine, or fail with a configuration error
    fn engine(&self) -> FieldsealResult<&Encrypter> {
        self.engine
            .as_deref()
            .ok_or_else(|| FieldsealError::Config("encryption engine not available".to_string()))
    }
}
