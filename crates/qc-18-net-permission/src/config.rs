//! # Net Permission Configuration
//!
//! ```toml
//! contract_address = "0x0000000000000000000000000000005065726d74"
//! max_walk_steps = 10000
//! ```

use crate::domain::{Address, PermissionError, DEFAULT_MAX_WALK_STEPS};
use serde::{Deserialize, Serialize};

/// Default owner of the whitelist slots (the native permission contract).
pub const DEFAULT_CONTRACT_ADDRESS: Address = Address::new([
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x50, 0x65, 0x72, 0x6d, 0x74,
]);

/// Whitelist configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetPermissionConfig {
    /// Account owning every whitelist slot.
    pub contract_address: Address,

    /// Upper bound on members visited by an audit walk.
    pub max_walk_steps: usize,
}

impl Default for NetPermissionConfig {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            max_walk_steps: DEFAULT_MAX_WALK_STEPS,
        }
    }
}

impl NetPermissionConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            contract_address: Address::new([0x18; 20]),
            max_walk_steps: 256,
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, PermissionError> {
        let config: Self =
            toml::from_str(text).map_err(|e| PermissionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the service cannot run with.
    pub fn validate(&self) -> Result<(), PermissionError> {
        if self.max_walk_steps == 0 {
            return Err(PermissionError::Config(
                "max_walk_steps must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
