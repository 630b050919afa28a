//! # Service Module
//!
//! `NetPermission` (the list operations) and the external audit walker.

pub mod audit;
mod core;


pub use audit::{verify_chain, walk};
pub use self::core::NetPermission;
