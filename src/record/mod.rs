//! Persisted-record seam for fieldseal
//!
//! The host persistence framework is deliberately abstract: fieldseal only
//! needs named attribute access and the lifecycle notifications it fires
//! around find/insert/update. [`EncryptionBehavior`] attaches to that seam
//! and transforms the configured attributes in place.

pub mod behavior;

pub use behavior::EncryptionBehavior;

use std::collections::HashMap;

/// Read/write access to a record's named attributes.
///
/// `None` means the attribute is unset. The behavior also writes `None`
/// back when a stored value cannot be decrypted, so callers reading a
/// configured attribute must treat `None` as "missing or unreadable".
pub trait AttributeRecord {
    /// Get the current value of a named attribute
    fn get_attribute(&self, name: &str) -> Option<String>;

    /// Set or clear a named attribute
    fn set_attribute(&mut self, name: &str, value: Option<String>);
}

/// Lifecycle notifications fired by the host persistence framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Record loaded from storage
    AfterFind,
    /// About to insert a new record
    BeforeInsert,
    /// About to update an existing record
    BeforeUpdate,
    /// Record inserted
    AfterInsert,
    /// Record updated
    AfterUpdate,
}

/// A map-backed record for tests and embedders without their own record type
#[derive(Debug, Clone, Default)]
pub struct MemoryRecord {
    attributes: HashMap<String, String>,
}

impl MemoryRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from attribute name/value pairs
    pub fn with_attributes<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl AttributeRecord for MemoryRecord {
    fn get_attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.attributes.insert(name.to_string(), value);
            }
            None => {
                self.attributes.remove(name);
            }
        }
    }
}
