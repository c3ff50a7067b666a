//! Byte-oriented storage boundary for the license.
//!
//! The store only moves bytes. Nothing here validates: a license is checked
//! at the point of use, every time.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{LicenseError, LicenseResult};
use crate::keys::license_key;
use crate::license::LicenseFile;
use crate::typemap::{decode_wrapped, encode_wrapped};

/// A key-value store addressed by the keys in [`crate::keys`].
pub trait LicenseStore: Send + Sync {
    /// Returns the value at `key`, if any.
    fn get(&self, key: &str) -> LicenseResult<Option<Vec<u8>>>;

    /// Stores `value` at `key`, replacing any previous value.
    fn put(&self, key: &str, value: Vec<u8>) -> LicenseResult<()>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every key starting with `prefix`, in order.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn keys_with_prefix(&self, prefix: &str) -> LicenseResult<Vec<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LicenseError::Storage(e.to_string()))?;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }
}

impl LicenseStore for MemoryStore {
    fn get(&self, key: &str) -> LicenseResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| LicenseError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> LicenseResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| LicenseError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Writes the license in its wrapped wire form at [`license_key`].
///
/// # Errors
///
/// Returns `Serialization` or the store's error.
pub fn put_license<S: LicenseStore + ?Sized>(store: &S, file: &LicenseFile) -> LicenseResult<()> {
    store.put(&license_key(), encode_wrapped(file)?)
}

/// Reads and decodes the license, if one is stored.
///
/// # Errors
///
/// Returns the store's error, or the errors of
/// [`decode_wrapped`](crate::decode_wrapped) if the stored bytes are not a
/// wrapped license file.
pub fn get_license<S: LicenseStore + ?Sized>(store: &S) -> LicenseResult<Option<LicenseFile>> {
    store
        .get(&license_key())?
        .map(|bytes| decode_wrapped(&bytes).map(|r| r.into_license_file()))
        .transpose()
}
