//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! A config file that lists `[[sites]]` replaces the default site list.

mod button;
mod device;
mod navigator;
mod sites;
mod system;

pub use button::*;
pub use device::*;
pub use navigator::*;
pub use sites::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Loaded once at start-up and never reloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    pub device: DeviceConfig,
    pub button: ButtonConfig,
    pub navigator: NavigatorConfig,
    pub alerts: AlertConfig,
    pub sites: Vec<SiteOption>,
    pub logging: LoggingConfig,
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            button: ButtonConfig::default(),
            navigator: NavigatorConfig::default(),
            alerts: AlertConfig::default(),
            sites: default_sites(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
