//! Core TOML config loading: read from path or platform default.

use crate::schema::PwaConfig;
use crate::validation;
use pwa_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Environment variable that overrides `device.password`.
pub const PASSWORD_ENV: &str = "PWA_DEVICE_PASSWORD";

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields and
/// applies environment overrides. If validation fails, a warning is logged
/// and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<PwaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: PwaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config, std::env::var(PASSWORD_ENV).ok());

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    for (i, j) in validation::overlapping_sites(&config.sites) {
        warn!(
            "sites[{j}].url contains sites[{i}].url; both toggles will show on for {}",
            config.sites[j].url
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/pwa-controls/config.toml`
/// On Linux: `~/.config/pwa-controls/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<PwaConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            let mut config = PwaConfig::default();
            apply_env_overrides(&mut config, std::env::var(PASSWORD_ENV).ok());
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// Apply overrides taken from the environment.
pub(crate) fn apply_env_overrides(config: &mut PwaConfig, password: Option<String>) {
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        config.device.password = password;
    }
}
