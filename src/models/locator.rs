use serde::{Deserialize, Serialize};

/// Static metadata for a storage slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocatorInfo {
    pub zone: String,

    /// Nominal capacity in units
    #[serde(default)]
    pub capacity: u32,

    /// Storage condition ("Ambient Temperature", "Cold Storage")
    #[serde(default)]
    pub conditions: String,

    /// Whether goods may be moved into this locator
    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

impl LocatorInfo {
    pub fn new(zone: impl Into<String>, capacity: u32, conditions: impl Into<String>, valid: bool) -> Self {
        Self {
            zone: zone.into(),
            capacity,
            conditions: conditions.into(),
            valid,
        }
    }
}
