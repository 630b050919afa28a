//! # Domain Entities for the Network Permission Whitelist
//!
//! The whitelist is an intrusive doubly linked list: every member owns one
//! storage slot holding its own address plus the addresses of its neighbours.
//!
//! ## Type Decisions
//!
//! - `Address` is a newtype over `[u8; 20]` so that config files and logs can
//!   use the `0x`-prefixed hex form while storage keeps the raw bytes.
//! - Links are `Option<Address>`; an absent link is encoded as an empty RLP
//!   string, never as a zero address.

use super::errors::PermissionError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a node address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// 32-byte storage slot key.
pub type StorageKey = [u8; 32];

/// Node identity (derived from the node public key).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Wrap raw address bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build an address from a slice, `None` unless it is exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; ADDRESS_LENGTH]>::try_from(bytes).ok().map(Self)
    }

    /// Raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// True for the zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl FromStr for Address {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|e| PermissionError::InvalidAddress(e.to_string()))?;
        Self::from_slice(&bytes).ok_or_else(|| {
            PermissionError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ADDRESS_LENGTH,
                bytes.len()
            ))
        })
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One node of the whitelist, persisted at `entry_key(node_addr)`.
///
/// ## States
///
/// - **empty**: zero address and no links. Never persisted; writing an empty
///   entry clears the slot, reading a clear slot yields an empty entry.
/// - **linked**: at least one neighbour present.
/// - **unlinked**: a singleton member (reachable through `head`) or a
///   revoked tombstone. The two are told apart by the head pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionEntry {
    /// Address of the node this entry describes.
    pub node_addr: Address,
    /// Predecessor in list order, `None` for the head.
    pub prev: Option<Address>,
    /// Successor in list order, `None` for the tail.
    pub next: Option<Address>,
}

impl PermissionEntry {
    /// Fresh unlinked entry for `node_addr`.
    pub fn new(node_addr: Address) -> Self {
        Self {
            node_addr,
            prev: None,
            next: None,
        }
    }

    /// Builder method to set the predecessor.
    pub fn with_prev(mut self, prev: Option<Address>) -> Self {
        self.prev = prev;
        self
    }

    /// Builder method to set the successor.
    pub fn with_next(mut self, next: Option<Address>) -> Self {
        self.next = next;
        self
    }

    /// True when the entry carries no information and must not be stored.
    pub fn is_empty(&self) -> bool {
        self.node_addr.is_zero() && self.prev.is_none() && self.next.is_none()
    }

    /// True when at least one neighbour link is present.
    pub fn is_linked(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }

    /// Drop both links, keeping the identity (tombstone).
    pub fn unlink(&mut self) {
        self.prev = None;
        self.next = None;
    }
}

/// Result of a whitelist lookup.
///
/// `prev`/`next` are returned whatever `listed` says; callers must check
/// `listed` before treating them as in-list pointers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermissionInfo {
    /// Whether the node is currently a member.
    pub listed: bool,
    /// Stored predecessor link.
    pub prev: Option<Address>,
    /// Stored successor link.
    pub next: Option<Address>,
}
