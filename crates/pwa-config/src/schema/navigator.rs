//! Companion panel and alert settings.

use serde::{Deserialize, Serialize};

/// Where a touch panel is installed, as `TouchPanel Configure` expects it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PanelLocation {
    #[default]
    InsideRoom,
    OutsideRoom,
}

impl PanelLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelLocation::InsideRoom => "InsideRoom",
            PanelLocation::OutsideRoom => "OutsideRoom",
        }
    }
}

/// Which connected devices count as companion panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Devices whose name ends with this are managed; all others are ignored.
    pub name_suffix: String,
    pub location: PanelLocation,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            name_suffix: "Room Navigator".into(),
            location: PanelLocation::InsideRoom,
        }
    }
}

impl NavigatorConfig {
    pub fn matches(&self, device_name: &str) -> bool {
        device_name.ends_with(&self.name_suffix)
    }
}

/// Advisory alerts shown while a panel switches mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Seconds the alert stays on screen (valid range: 1-300).
    pub duration_secs: u32,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { duration_secs: 20 }
    }
}
