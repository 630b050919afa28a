//! # Domain Errors
//!
//! Error types for the network permission whitelist.

use super::entities::StorageKey;
use std::fmt;
use thiserror::Error;

/// Whitelist error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The storage adapter failed to read or write a slot.
    ///
    /// The enclosing transaction is expected to discard any writes already
    /// issued by the failing operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted bytes could not be decoded. Never retried.
    #[error("Corrupted slot 0x{key}: {reason}")]
    Corruption {
        /// Hex-encoded storage key of the offending slot
        key: String,
        /// Decoder failure
        reason: String,
    },

    /// `first` was called on an empty whitelist.
    #[error("Whitelist is empty")]
    EmptyList,

    /// Text could not be parsed as a node address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The external walker found the stored chain inconsistent.
    #[error("Broken chain: {0}")]
    BrokenChain(String),

    /// The external walker hit its configured step bound.
    #[error("Walk limit exceeded: more than {limit} members")]
    WalkLimitExceeded {
        /// Configured bound
        limit: usize,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PermissionError {
    /// Build a `Corruption` error for the slot at `key`.
    pub fn corruption(key: &StorageKey, reason: impl fmt::Display) -> Self {
        Self::Corruption {
            key: hex::encode(key),
            reason: reason.to_string(),
        }
    }

    /// True for the (non-fatal) empty list condition.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::EmptyList)
    }
}
