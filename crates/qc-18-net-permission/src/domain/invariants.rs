//! # Domain Invariants
//!
//! Structural rules of the stored chain. Checked by the audit walker, never
//! by the list operations themselves.

use super::entities::{Address, PermissionInfo};
use super::errors::PermissionError;

/// Default bound on the number of members an audit walk will visit.
pub const DEFAULT_MAX_WALK_STEPS: usize = 10_000;

/// Invariant: neighbour links are symmetric.
///
/// `current` was reached by following `next` from `prev_addr` (or is the
/// head when `prev_addr` is `None`), so its stored `prev` must point back.
pub fn invariant_back_link(
    current: &Address,
    info: &PermissionInfo,
    prev_addr: Option<Address>,
) -> Result<(), PermissionError> {
    if !info.listed {
        return Err(PermissionError::BrokenChain(format!(
            "{} is linked into the chain but not listed",
            current
        )));
    }
    if info.prev != prev_addr {
        return Err(PermissionError::BrokenChain(format!(
            "{} has prev {:?}, expected {:?}",
            current, info.prev, prev_addr
        )));
    }
    Ok(())
}

/// Invariant: sentinels match the walked chain.
///
/// `head`/`tail` are absent iff the chain is empty; otherwise they name its
/// first and last members.
pub fn invariant_sentinels(
    head: Option<Address>,
    tail: Option<Address>,
    members: &[Address],
) -> Result<(), PermissionError> {
    let (first, last) = (members.first().copied(), members.last().copied());
    if head != first {
        return Err(PermissionError::BrokenChain(format!(
            "head is {:?}, chain starts at {:?}",
            head, first
        )));
    }
    if tail != last {
        return Err(PermissionError::BrokenChain(format!(
            "tail is {:?}, chain ends at {:?}",
            tail, last
        )));
    }
    Ok(())
}
