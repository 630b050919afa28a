//! # Outbound Ports
//!
//! The contract storage the whitelist is persisted in.

use crate::domain::{Address, PermissionError, StorageKey};
use std::sync::Arc;

/// Sparse key-value storage addressed by `(owner, 32-byte key)`.
///
/// Atomicity is the caller's concern: all writes issued by one whitelist
/// operation belong to the caller's transaction and are discarded together
/// if the operation fails.
pub trait PermissionStorage: Send + Sync {
    /// Read a slot. `None` if never written or cleared.
    fn read_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
    ) -> Result<Option<Vec<u8>>, PermissionError>;

    /// Write a slot. `None` (or an empty value) clears it.
    fn write_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
        value: Option<Vec<u8>>,
    ) -> Result<(), PermissionError>;

    /// Read a slot and hand the raw bytes to `decode`.
    fn decode_storage<T, F>(
        &self,
        owner: &Address,
        key: &StorageKey,
        decode: F,
    ) -> Result<T, PermissionError>
    where
        Self: Sized,
        F: FnOnce(Option<&[u8]>) -> Result<T, PermissionError>,
    {
        let raw = self.read_slot(owner, key)?;
        decode(raw.as_deref())
    }

    /// Write whatever `encode` produces; `None` clears the slot.
    fn encode_storage<F>(
        &self,
        owner: &Address,
        key: &StorageKey,
        encode: F,
    ) -> Result<(), PermissionError>
    where
        Self: Sized,
        F: FnOnce() -> Result<Option<Vec<u8>>, PermissionError>,
    {
        let value = encode()?;
        self.write_slot(owner, key, value)
    }
}

impl<S: PermissionStorage + ?Sized> PermissionStorage for Arc<S> {
    fn read_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
    ) -> Result<Option<Vec<u8>>, PermissionError> {
        (**self).read_slot(owner, key)
    }

    fn write_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
        value: Option<Vec<u8>>,
    ) -> Result<(), PermissionError> {
        (**self).write_slot(owner, key, value)
    }
}
