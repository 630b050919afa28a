//! # Domain Module
//!
//! Core types, storage codec and key derivation for the whitelist.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod keys;

pub use codec::*;
pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use keys::*;
