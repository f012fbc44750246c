//! PWA Controls configuration.
//!
//! TOML-based configuration with full validation. All sections use
//! sensible defaults so partial configs work out of the box. The config
//! is read once at start-up and passed around as an immutable value.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pwa_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    AlertConfig, ButtonConfig, DeviceConfig, LogLevel, NavigatorConfig, PanelLocation, PwaConfig,
    SiteOption, CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{create_default_config, default_config_path, PASSWORD_ENV};

use pwa_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// Reads `path` when given (it must exist), otherwise `config.toml` from
/// the OS config directory, creating a default there if none exists.
/// Unlike the loaders in [`toml_loader`], an invalid config is an error.
pub fn load_config(path: Option<&Path>) -> Result<PwaConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string with the password redacted.
pub fn config_to_json(config: &PwaConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.device.password.is_empty() {
        redacted.device.password = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
