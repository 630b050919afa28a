//! # Whitelist Audit
//!
//! Walks the chain from the outside using only `first` and repeated `get`,
//! the same way any external caller would. The list operations never do
//! this; a walk is O(members) and therefore bounded by `max_walk_steps`.

use super::core::NetPermission;
use crate::domain::{
    invariant_back_link, invariant_sentinels, Address, PermissionError, Sentinel,
};
use crate::ports::{NetPermissionApi, PermissionStorage};
use std::collections::HashSet;
use tracing::debug;

/// Members in list order, head first.
///
/// Fails with `BrokenChain` when a back link is wrong or a member repeats,
/// and with `WalkLimitExceeded` past `max_steps` members.
pub fn walk<A: NetPermissionApi + ?Sized>(
    api: &A,
    max_steps: usize,
) -> Result<Vec<Address>, PermissionError> {
    let head = match api.first() {
        Ok(entry) => entry,
        Err(PermissionError::EmptyList) => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut members = Vec::new();
    let mut seen = HashSet::new();
    let mut prev = None;
    let mut cursor = Some(head.node_addr);

    while let Some(current) = cursor {
        if members.len() == max_steps {
            return Err(PermissionError::WalkLimitExceeded { limit: max_steps });
        }
        if !seen.insert(current) {
            return Err(PermissionError::BrokenChain(format!(
                "{} appears twice",
                current
            )));
        }

        let info = api.get(current)?;
        invariant_back_link(&current, &info, prev)?;

        members.push(current);
        prev = Some(current);
        cursor = info.next;
    }

    debug!("[qc-18] Walked {} whitelist members", members.len());
    Ok(members)
}

/// Walk the chain and check the sentinels against it.
pub fn verify_chain<S: PermissionStorage>(
    service: &NetPermission<S>,
    max_steps: usize,
) -> Result<Vec<Address>, PermissionError> {
    let members = walk(service, max_steps)?;
    let head = service.pointer(Sentinel::Head)?;
    let tail = service.pointer(Sentinel::Tail)?;
    invariant_sentinels(head, tail, &members)?;
    Ok(members)
}
