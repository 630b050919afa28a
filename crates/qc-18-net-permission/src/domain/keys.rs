//! # Storage Keys
//!
//! Every whitelist slot lives under the permission contract's address.
//! Entry slots are keyed by `keccak256(node_addr)`; the two sentinel slots
//! by `keccak256("head")` and `keccak256("tail")`. The preimages have
//! different lengths, so sentinel keys cannot collide with entry keys in
//! practice.

use super::entities::{Address, StorageKey};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::sync::LazyLock;

/// Slot holding the first member of the whitelist.
pub static HEAD_KEY: LazyLock<StorageKey> = LazyLock::new(|| keccak256(b"head"));

/// Slot holding the last member of the whitelist.
pub static TAIL_KEY: LazyLock<StorageKey> = LazyLock::new(|| keccak256(b"tail"));

/// Compute Keccak256 hash.
pub fn keccak256(data: &[u8]) -> StorageKey {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Storage key of the entry describing `node_addr`.
pub fn entry_key(node_addr: &Address) -> StorageKey {
    keccak256(node_addr.as_bytes())
}

/// The two list boundary pointers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// First member (entry with no predecessor).
    Head,
    /// Last member (entry with no successor).
    Tail,
}

impl Sentinel {
    /// Storage key of this sentinel slot.
    pub fn key(self) -> StorageKey {
        match self {
            Self::Head => *HEAD_KEY,
            Self::Tail => *TAIL_KEY,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => write!(f, "head"),
            Self::Tail => write!(f, "tail"),
        }
    }
}
