//! # In-Memory Storage Adapter
//!
//! Journaled slot storage standing in for the contract state of the outer
//! execution engine. Every write records the previous slot value so a failed
//! transaction can be rolled back with [`InMemoryStorage::revert_to`].

use crate::domain::{Address, PermissionError, StorageKey};
use crate::ports::PermissionStorage;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

type SlotId = (Address, StorageKey);

/// Position in the write journal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Slot access counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Slot reads since the last reset
    pub reads: u64,
    /// Slot writes since the last reset
    pub writes: u64,
}

#[derive(Default)]
struct MemoryState {
    slots: HashMap<SlotId, Vec<u8>>,
    /// Previous value of every slot written since the last commit.
    journal: Vec<(SlotId, Option<Vec<u8>>)>,
}

/// In-memory journaled storage for testing and tooling.
#[derive(Default)]
pub struct InMemoryStorage {
    state: RwLock<MemoryState>,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl InMemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the current journal position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.state.read().journal.len())
    }

    /// Undo every write made after `checkpoint`.
    pub fn revert_to(&self, checkpoint: Checkpoint) -> Result<(), PermissionError> {
        let mut state = self.state.write();
        if checkpoint.0 > state.journal.len() {
            return Err(PermissionError::Storage(format!(
                "checkpoint {} is beyond journal length {}",
                checkpoint.0,
                state.journal.len()
            )));
        }

        let undone = state.journal.split_off(checkpoint.0);
        let count = undone.len();
        for (slot, previous) in undone.into_iter().rev() {
            match previous {
                Some(value) => state.slots.insert(slot, value),
                None => state.slots.remove(&slot),
            };
        }
        debug!("[qc-18] Reverted {} slot writes", count);
        Ok(())
    }

    /// Make every write so far permanent, dropping the journal.
    pub fn commit(&self) {
        let mut state = self.state.write();
        debug!("[qc-18] Committed {} slot writes", state.journal.len());
        state.journal.clear();
    }

    /// Number of non-empty slots.
    pub fn slot_count(&self) -> usize {
        self.state.read().slots.len()
    }

    /// Copy of every slot, for state comparisons.
    pub fn snapshot(&self) -> HashMap<SlotId, Vec<u8>> {
        self.state.read().slots.clone()
    }

    /// Overwrite a slot bypassing the journal (fixtures only).
    pub fn put_raw(&self, owner: Address, key: StorageKey, value: Vec<u8>) {
        self.state.write().slots.insert((owner, key), value);
    }

    /// Access counters.
    pub fn stats(&self) -> AccessStats {
        AccessStats {
            reads: self.reads.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
        }
    }

    /// Zero the access counters.
    pub fn reset_stats(&self) {
        self.reads.store(0, Ordering::Relaxed);
        self.writes.store(0, Ordering::Relaxed);
    }
}

impl PermissionStorage for InMemoryStorage {
    fn read_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
    ) -> Result<Option<Vec<u8>>, PermissionError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(self.state.read().slots.get(&(*owner, *key)).cloned())
    }

    fn write_slot(
        &self,
        owner: &Address,
        key: &StorageKey,
        value: Option<Vec<u8>>,
    ) -> Result<(), PermissionError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        let slot = (*owner, *key);
        let mut state = self.state.write();

        let previous = match value {
            Some(bytes) if !bytes.is_empty() => state.slots.insert(slot, bytes),
            _ => state.slots.remove(&slot),
        };
        state.journal.push((slot, previous));
        Ok(())
    }
}
