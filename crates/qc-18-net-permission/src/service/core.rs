//! # Net Permission Service
//!
//! The whitelist as a doubly linked list spread over contract storage.
//!
//! ## Algorithm
//!
//! Each member's entry holds its `prev`/`next` neighbours; the `head` and
//! `tail` sentinel slots hold the list boundaries. Every operation touches at
//! most the entry itself, its two neighbours and the two sentinels, so the
//! cost of a call does not depend on the number of members.
//!
//! A singleton member has no links at all and is recognised only through
//! `head`. A revoked member keeps its slot with both links cleared.

use crate::config::NetPermissionConfig;
use crate::domain::{
    decode_entry, decode_pointer, encode_entry, encode_pointer, entry_key, Address,
    PermissionEntry, PermissionError, PermissionInfo, Sentinel, StorageKey,
};
use crate::ports::{NetPermissionApi, PermissionStorage};
use rlp::DecoderError;
use tracing::{debug, info, warn};

/// Network permission whitelist over a [`PermissionStorage`].
pub struct NetPermission<S: PermissionStorage> {
    /// Account owning every whitelist slot.
    owner: Address,
    storage: S,
}

impl<S: PermissionStorage> NetPermission<S> {
    /// Create a whitelist whose slots live under `owner`.
    pub fn new(owner: Address, storage: S) -> Self {
        Self { owner, storage }
    }

    /// Create a whitelist from configuration.
    pub fn from_config(config: &NetPermissionConfig, storage: S) -> Result<Self, PermissionError> {
        config.validate()?;
        Ok(Self::new(config.contract_address, storage))
    }

    /// Owner account of the whitelist slots.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current value of a sentinel slot.
    pub fn pointer(&self, sentinel: Sentinel) -> Result<Option<Address>, PermissionError> {
        let key = sentinel.key();
        self.storage
            .decode_storage(&self.owner, &key, |raw| {
                decode_pointer(raw).map_err(|e| corrupted(&key, e))
            })
    }

    fn set_pointer(
        &self,
        sentinel: Sentinel,
        node_addr: Option<Address>,
    ) -> Result<(), PermissionError> {
        self.storage
            .encode_storage(&self.owner, &sentinel.key(), || {
                Ok(encode_pointer(node_addr.as_ref()))
            })
    }

    /// Stored entry of `node_addr`; the empty entry if the slot is clear.
    ///
    /// A clear slot decodes to the zero address, so the requested address is
    /// put back in place to keep the entry self-describing.
    pub fn entry(&self, node_addr: Address) -> Result<PermissionEntry, PermissionError> {
        let key = entry_key(&node_addr);
        let mut entry = self.storage.decode_storage(&self.owner, &key, |raw| {
            decode_entry(raw).map_err(|e| corrupted(&key, e))
        })?;
        if entry.is_empty() {
            entry.node_addr = node_addr;
        }
        Ok(entry)
    }

    fn set_entry(&self, entry: &PermissionEntry) -> Result<(), PermissionError> {
        self.storage
            .encode_storage(&self.owner, &entry_key(&entry.node_addr), || {
                Ok(encode_entry(entry))
            })
    }

    /// Membership test: linked, or the lone member named by `head`.
    ///
    /// Returns the loaded entry alongside so callers do not read it twice.
    fn in_list(
        &self,
        node_addr: Address,
    ) -> Result<(bool, PermissionEntry), PermissionError> {
        let entry = self.entry(node_addr)?;
        if entry.is_linked() {
            return Ok((true, entry));
        }
        let head = self.pointer(Sentinel::Head)?;
        Ok((head == Some(node_addr), entry))
    }
}

impl<S: PermissionStorage> NetPermissionApi for NetPermission<S> {
    fn get(&self, node_addr: Address) -> Result<PermissionInfo, PermissionError> {
        let (listed, entry) = self.in_list(node_addr)?;
        debug!(node = %node_addr, listed, "[qc-18] Whitelist lookup");
        Ok(PermissionInfo {
            listed,
            prev: entry.prev,
            next: entry.next,
        })
    }

    fn add(&self, node_addr: Address) -> Result<bool, PermissionError> {
        let (listed, _) = self.in_list(node_addr)?;
        if listed {
            debug!(node = %node_addr, "[qc-18] Add ignored, node already listed");
            return Ok(false);
        }

        let tail = self.pointer(Sentinel::Tail)?;
        // Any tombstoned links are discarded here.
        let entry = PermissionEntry::new(node_addr).with_prev(tail);

        match tail {
            None => self.set_pointer(Sentinel::Head, Some(node_addr))?,
            Some(tail_addr) => {
                let mut tail_entry = self.entry(tail_addr)?;
                tail_entry.next = Some(node_addr);
                self.set_entry(&tail_entry)?;
            }
        }
        self.set_entry(&entry)?;
        self.set_pointer(Sentinel::Tail, Some(node_addr))?;

        info!(node = %node_addr, prev = ?tail, "[qc-18] Node added to whitelist");
        Ok(true)
    }

    fn revoke(&self, node_addr: Address) -> Result<bool, PermissionError> {
        let (listed, mut entry) = self.in_list(node_addr)?;
        if !listed {
            debug!(node = %node_addr, "[qc-18] Revoke ignored, node not listed");
            return Ok(false);
        }

        match entry.prev {
            None => self.set_pointer(Sentinel::Head, entry.next)?,
            Some(prev_addr) => {
                let mut prev_entry = self.entry(prev_addr)?;
                prev_entry.next = entry.next;
                self.set_entry(&prev_entry)?;
            }
        }

        match entry.next {
            None => self.set_pointer(Sentinel::Tail, entry.prev)?,
            Some(next_addr) => {
                let mut next_entry = self.entry(next_addr)?;
                next_entry.prev = entry.prev;
                self.set_entry(&next_entry)?;
            }
        }

        let (prev, next) = (entry.prev, entry.next);
        entry.unlink();
        self.set_entry(&entry)?;

        info!(
            node = %node_addr,
            prev = ?prev,
            next = ?next,
            "[qc-18] Node revoked from whitelist"
        );
        Ok(true)
    }

    fn first(&self) -> Result<PermissionEntry, PermissionError> {
        let head = self
            .pointer(Sentinel::Head)?
            .ok_or(PermissionError::EmptyList)?;
        debug!(head = %head, "[qc-18] Reading whitelist head");
        self.entry(head)
    }
}

fn corrupted(key: &StorageKey, err: DecoderError) -> PermissionError {
    warn!(
        "[qc-18] Undecodable slot 0x{}: {:?}",
        hex::encode(key),
        err
    );
    PermissionError::corruption(key, format!("{:?}", err))
}
