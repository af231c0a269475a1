//! Lock retention configuration.

use serde::{Deserialize, Serialize};

/// Settings for the stale-lock maintenance sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Files holding any lock older than this many days have their whole
    /// lock set cleared by the sweep.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
        }
    }
}

fn default_retention_days() -> u32 {
    30
}
