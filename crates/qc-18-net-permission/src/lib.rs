//! # QC-18 Network Permission
//!
//! Whitelist of node identities allowed to join a permissioned network.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Contract storage offers nothing but 32-byte keyed slots, so the whitelist
//! is kept as a doubly linked list whose nodes are individual slots:
//!
//! ```text
//!   [head] ──→ A ⇄ B ⇄ C ←── [tail]
//!
//!   slot keccak256("head")  = A
//!   slot keccak256("tail")  = C
//!   slot keccak256(A)       = rlp([A, "", B])
//!   slot keccak256(B)       = rlp([B, A, C])
//!   slot keccak256(C)       = rlp([C, B, ""])
//! ```
//!
//! Lookup, add and revoke each touch a fixed handful of slots regardless of
//! how many members exist. Revoked members keep their slot with cleared
//! links.
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-net-permission/
//! ├── domain/          # Address, PermissionEntry, RLP codec, storage keys, errors
//! ├── ports/           # NetPermissionApi (inbound) + PermissionStorage (outbound)
//! ├── adapters/        # InMemoryStorage (journaled)
//! ├── service/         # NetPermission + audit walker
//! └── config.rs        # NetPermissionConfig
//! ```
//!
//! ## Transactions
//!
//! The service performs no locking or rollback of its own. All slot writes of
//! one call belong to the caller's transaction, which must be discarded if
//! the call returns an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{AccessStats, Checkpoint, InMemoryStorage};
pub use config::NetPermissionConfig;
pub use domain::{
    entry_key, Address, PermissionEntry, PermissionError, PermissionInfo, Sentinel, StorageKey,
    HEAD_KEY, TAIL_KEY,
};
pub use ports::{NetPermissionApi, PermissionStorage};
pub use service::{verify_chain, walk, NetPermission};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
