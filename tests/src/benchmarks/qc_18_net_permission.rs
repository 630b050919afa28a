//! # QC-18 Network Permission Brutal Benchmarks
//!
//! Claims to Validate:
//! - O(1) lookup: cost independent of whitelist length
//! - O(1) add/revoke: fixed number of slot reads/writes per call
//!
//! Brutal Conditions:
//! - 50K+ members in storage
//! - Revoke/re-add churn in the middle of the chain
//! - Lookups of revoked (tombstoned) and never-seen nodes

use criterion::{black_box, BenchmarkId, Criterion};
use qc_18_net_permission::{Address, InMemoryStorage, NetPermission, NetPermissionApi};
use rand::Rng;
use std::time::Duration;

const OWNER: Address = Address::new([0x18; 20]);

/// Deterministic node address for member `i`.
fn node(i: u32) -> Address {
    let mut bytes = [0u8; 20];
    bytes[..4].copy_from_slice(&i.to_be_bytes());
    bytes[19] = 0x01;
    Address::new(bytes)
}

/// Whitelist with `length` members, every tenth one revoked afterwards.
fn populated(length: u32) -> NetPermission<InMemoryStorage> {
    let wl = NetPermission::new(OWNER, InMemoryStorage::new());
    for i in 0..length {
        let _ = wl.add(node(i));
    }
    for i in (0..length).step_by(10) {
        let _ = wl.revoke(node(i));
    }
    wl.storage().commit();
    wl
}

pub fn brutal_lookup_o1(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/lookup_o1");
    group.measurement_time(Duration::from_secs(10));

    for length in [100u32, 10_000, 50_000] {
        let wl = populated(length);
        let mut rng = rand::thread_rng();

        group.bench_with_input(BenchmarkId::new("lookup_member", length), &wl, |b, wl| {
            b.iter(|| {
                let i = rng.gen_range(0..length);
                black_box(wl.get(node(i)))
            })
        });

        group.bench_with_input(BenchmarkId::new("lookup_stranger", length), &wl, |b, wl| {
            b.iter(|| black_box(wl.get(node(length + rng.gen_range(0..1000)))))
        });
    }

    group.finish();
}

pub fn brutal_churn_o1(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18/brutal/churn_o1");
    group.measurement_time(Duration::from_secs(10));

    for length in [100u32, 10_000, 50_000] {
        let wl = populated(length);
        let mut rng = rand::thread_rng();

        // Append then revoke the tail: length stays constant
        group.bench_with_input(BenchmarkId::new("add_revoke_tail", length), &wl, |b, wl| {
            let newcomer = node(u32::MAX);
            b.iter(|| {
                black_box(wl.add(newcomer).ok());
                black_box(wl.revoke(newcomer).ok());
                wl.storage().commit();
            })
        });

        // Pull a random member out of the middle and re-append it
        group.bench_with_input(BenchmarkId::new("revoke_readd_middle", length), &wl, |b, wl| {
            b.iter(|| {
                let member = node(rng.gen_range(0..length));
                black_box(wl.revoke(member).ok());
                black_box(wl.add(member).ok());
                wl.storage().commit();
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    brutal_lookup_o1(c);
    brutal_churn_o1(c);
}
