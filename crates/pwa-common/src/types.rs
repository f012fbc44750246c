use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating mode of a companion touch panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelMode {
    Controller,
    PersistentWebApp,
}

impl PanelMode {
    /// The value the device uses for this mode in `TouchPanel Configure`.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelMode::Controller => "Controller",
            PanelMode::PersistentWebApp => "PersistentWebApp",
        }
    }

    /// Derive the mode from a connected-device `Type`.
    ///
    /// A navigator reports `PersistentWebApp` while running a web app and
    /// `TouchPanel` otherwise.
    pub fn from_device_type(device_type: &str) -> Self {
        if device_type == "PersistentWebApp" {
            PanelMode::PersistentWebApp
        } else {
            PanelMode::Controller
        }
    }

    pub fn from_toggle(value: ToggleValue) -> Self {
        match value {
            ToggleValue::On => PanelMode::PersistentWebApp,
            ToggleValue::Off => PanelMode::Controller,
        }
    }
}

impl fmt::Display for PanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displayed state of a toggle widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleValue {
    On,
    Off,
}

impl ToggleValue {
    pub fn from_bool(on: bool) -> Self {
        if on {
            ToggleValue::On
        } else {
            ToggleValue::Off
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToggleValue::On => "on",
            ToggleValue::Off => "off",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on" => Some(ToggleValue::On),
            "off" => Some(ToggleValue::Off),
            _ => None,
        }
    }
}

impl fmt::Display for ToggleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paired touch panel, as last reported by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionPanel {
    /// Stable hardware identifier; doubles as the panel's widget id.
    pub id: String,
    /// `Name` as the device reports it, shown in mode-change logs.
    pub display_name: String,
    pub mode: PanelMode,
}
