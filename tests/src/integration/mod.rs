//! # Integration Tests
//!
//! Subsystem flows driven through public APIs only.

pub mod net_permission_flows;
