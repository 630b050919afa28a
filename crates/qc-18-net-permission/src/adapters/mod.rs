//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.

pub mod memory_storage;

pub use memory_storage::{AccessStats, Checkpoint, InMemoryStorage};
