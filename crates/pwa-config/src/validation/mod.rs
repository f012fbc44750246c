//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod device;
mod helpers;
mod panel;
mod sites;

#[cfg(test)]
mod tests;

pub use sites::overlapping_sites;

use crate::schema::PwaConfig;
use pwa_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PwaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    device::validate_device(&mut errors, config);
    panel::validate_button(&mut errors, config);
    panel::validate_navigator(&mut errors, config);
    panel::validate_alerts(&mut errors, config);
    sites::validate_sites(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
