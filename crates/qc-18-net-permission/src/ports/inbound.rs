//! # Inbound Ports
//!
//! Public API of the whitelist.

use crate::domain::{Address, PermissionEntry, PermissionError, PermissionInfo};

/// Network permission whitelist API.
///
/// Every call performs a bounded number of storage reads and writes,
/// independent of the number of members.
pub trait NetPermissionApi: Send + Sync {
    /// Look up a node: membership plus its stored neighbour links.
    fn get(&self, node_addr: Address) -> Result<PermissionInfo, PermissionError>;

    /// Append a node at the tail. `false` if it is already listed.
    fn add(&self, node_addr: Address) -> Result<bool, PermissionError>;

    /// Unlink a node, keeping its slot as a tombstone. `false` if it is not
    /// listed.
    fn revoke(&self, node_addr: Address) -> Result<bool, PermissionError>;

    /// Entry of the current head.
    ///
    /// # Errors
    ///
    /// * `PermissionError::EmptyList` - when there are no members
    fn first(&self) -> Result<PermissionEntry, PermissionError>;
}
