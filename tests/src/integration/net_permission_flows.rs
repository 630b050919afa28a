//! # Network Permission Integration Flows
//!
//! Exercises qc-18-net-permission the way the node runtime drives it:
//!
//! 1. **Admission gate**: inbound peers are accepted only while listed
//! 2. **Governance batch**: several add/revoke calls inside one transaction,
//!    rolled back as a unit when any call fails
//! 3. **Configured deployment**: whitelist built from a TOML config and
//!    audited by walking it from the outside

#[cfg(test)]
mod tests {
    use qc_18_net_permission::{
        verify_chain, Address, InMemoryStorage, NetPermission, NetPermissionApi,
        NetPermissionConfig, PermissionError, PermissionStorage, StorageKey,
    };
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Node address derived from a node public key, as peer discovery does.
    fn node_from_pubkey(pubkey: &[u8]) -> Address {
        let hash = qc_18_net_permission::domain::keccak256(pubkey);
        Address::from_slice(&hash[12..]).unwrap_or_default()
    }

    /// Minimal admission gate in front of the peer handshake.
    struct AdmissionGate<A: NetPermissionApi> {
        whitelist: A,
    }

    impl<A: NetPermissionApi> AdmissionGate<A> {
        fn admit(&self, node: Address) -> Result<bool, PermissionError> {
            Ok(self.whitelist.get(node)?.listed)
        }
    }

    /// Shared state that can be switched into a failing mode.
    struct FlakyState {
        inner: Arc<InMemoryStorage>,
        broken: AtomicBool,
    }

    impl PermissionStorage for FlakyState {
        fn read_slot(
            &self,
            owner: &Address,
            key: &StorageKey,
        ) -> Result<Option<Vec<u8>>, PermissionError> {
            self.inner.read_slot(owner, key)
        }

        fn write_slot(
            &self,
            owner: &Address,
            key: &StorageKey,
            value: Option<Vec<u8>>,
        ) -> Result<(), PermissionError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(PermissionError::Storage("state backend offline".into()));
            }
            self.inner.write_slot(owner, key, value)
        }
    }

    /// Apply a batch of governance actions as one transaction.
    fn apply_batch<S: PermissionStorage>(
        whitelist: &NetPermission<S>,
        state: &InMemoryStorage,
        actions: &[(bool, Address)],
    ) -> Result<(), PermissionError> {
        let checkpoint = state.checkpoint();
        for (grant, node) in actions {
            let result = if *grant {
                whitelist.add(*node)
            } else {
                whitelist.revoke(*node)
            };
            if let Err(e) = result {
                state.revert_to(checkpoint)?;
                return Err(e);
            }
        }
        state.commit();
        Ok(())
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[test]
    fn test_admission_follows_whitelist() {
        let config = NetPermissionConfig::for_testing();
        let whitelist = NetPermission::from_config(&config, InMemoryStorage::new()).unwrap();

        let validator = node_from_pubkey(b"validator-1 pubkey");
        let outsider = node_from_pubkey(b"outsider pubkey");
        whitelist.add(validator).unwrap();

        let gate = AdmissionGate { whitelist };
        assert!(gate.admit(validator).unwrap());
        assert!(!gate.admit(outsider).unwrap());

        gate.whitelist.revoke(validator).unwrap();
        assert!(!gate.admit(validator).unwrap());
    }

    #[test]
    fn test_governance_batch_commits() {
        let state = Arc::new(InMemoryStorage::new());
        let whitelist =
            NetPermission::new(Address::new([0x18; 20]), Arc::clone(&state));

        let nodes: Vec<Address> = (0u8..4)
            .map(|i| node_from_pubkey(&[b'n', i]))
            .collect();

        apply_batch(
            &whitelist,
            &state,
            &[(true, nodes[0]), (true, nodes[1]), (true, nodes[2]), (false, nodes[1])],
        )
        .unwrap();

        assert_eq!(
            verify_chain(&whitelist, 16).unwrap(),
            vec![nodes[0], nodes[2]]
        );
    }

    #[test]
    fn test_governance_batch_rolls_back_on_failure() {
        let state = Arc::new(InMemoryStorage::new());
        let flaky = FlakyState {
            inner: Arc::clone(&state),
            broken: AtomicBool::new(false),
        };
        let whitelist = NetPermission::new(Address::new([0x18; 20]), flaky);

        let a = node_from_pubkey(b"a");
        let b = node_from_pubkey(b"b");
        apply_batch(&whitelist, &state, &[(true, a), (true, b)]).unwrap();
        let before = state.snapshot();

        // First action succeeds, then the backend dies mid-batch
        let c = node_from_pubkey(b"c");
        let checkpoint = state.checkpoint();
        whitelist.revoke(a).unwrap();
        whitelist.storage().broken.store(true, Ordering::SeqCst);
        assert!(matches!(
            whitelist.add(c),
            Err(PermissionError::Storage(_))
        ));
        state.revert_to(checkpoint).unwrap();

        assert_eq!(state.snapshot(), before);
        whitelist.storage().broken.store(false, Ordering::SeqCst);
        assert_eq!(verify_chain(&whitelist, 16).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_configured_whitelist_audit() {
        let config = NetPermissionConfig::from_toml_str(
            r#"
            contract_address = "0x0000000000000000000000000000000000000018"
            max_walk_steps = 3
            "#,
        )
        .unwrap();
        let whitelist = NetPermission::from_config(&config, InMemoryStorage::new()).unwrap();

        for i in 0u8..3 {
            whitelist.add(node_from_pubkey(&[i])).unwrap();
        }
        assert_eq!(
            verify_chain(&whitelist, config.max_walk_steps).unwrap().len(),
            3
        );

        whitelist.add(node_from_pubkey(&[3])).unwrap();
        assert_eq!(
            verify_chain(&whitelist, config.max_walk_steps),
            Err(PermissionError::WalkLimitExceeded { limit: 3 })
        );
    }

    #[test]
    fn test_empty_whitelist_admits_nobody() {
        let whitelist = NetPermission::new(Address::new([0x18; 20]), InMemoryStorage::new());
        assert!(whitelist.first().unwrap_err().is_empty_list());

        let gate = AdmissionGate { whitelist };
        assert!(!gate.admit(node_from_pubkey(b"anyone")).unwrap());
    }
}
