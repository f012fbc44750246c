//! In-memory `RoomDevice` that records every write.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pwa_common::{Alert, PanelMode, PwaError, Result, ToggleValue, XapiError};
use pwa_config::{PanelLocation, PwaConfig, SiteOption};

use crate::device::{ConnectedDevice, RoomDevice};

pub const NAVIGATOR_NAME: &str = "Cisco Room Navigator";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCall {
    SetActiveUrl(String),
    ConfigurePanel {
        panel_id: String,
        location: PanelLocation,
        mode: PanelMode,
    },
    Alert(Alert),
    SavePanel { panel_id: String, xml: String },
    SetWidget { widget_id: String, value: ToggleValue },
    Subscribe(String),
}

#[derive(Default)]
struct State {
    active_url: String,
    devices: Vec<ConnectedDevice>,
    calls: Vec<DeviceCall>,
    next_subscription: u64,
}

#[derive(Default)]
pub struct RecordingDevice {
    state: Mutex<State>,
    failing: bool,
    failing_saves: bool,
}

pub fn config_with_sites(sites: &[(&str, &str)]) -> Arc<PwaConfig> {
    let mut config = PwaConfig::default();
    config.sites = sites
        .iter()
        .map(|(label, url)| SiteOption::new(*label, *url))
        .collect();
    Arc::new(config)
}

fn device_type(mode: PanelMode) -> &'static str {
    match mode {
        PanelMode::PersistentWebApp => "PersistentWebApp",
        PanelMode::Controller => "TouchPanel",
    }
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active_url(self, url: &str) -> Self {
        self.state.lock().unwrap().active_url = url.to_string();
        self
    }

    pub fn with_navigator(self, id: &str, mode: PanelMode) -> Self {
        self.attach(id, NAVIGATOR_NAME, device_type(mode));
        self
    }

    pub fn with_device(self, id: &str, name: &str, device_type: &str) -> Self {
        self.attach(id, name, device_type);
        self
    }

    /// Every call fails as if the connection had dropped.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Only `save_panel` fails.
    pub fn failing_saves(mut self) -> Self {
        self.failing_saves = true;
        self
    }

    pub fn attach(&self, id: &str, name: &str, device_type: &str) {
        self.state.lock().unwrap().devices.push(ConnectedDevice {
            id: id.to_string(),
            name: name.to_string(),
            device_type: device_type.to_string(),
        });
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.state.lock().unwrap().calls)
    }

    pub fn widget_values(&self) -> Vec<(String, ToggleValue)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DeviceCall::SetWidget { widget_id, value } => Some((widget_id, value)),
                _ => None,
            })
            .collect()
    }

    pub fn configured_modes(&self) -> Vec<(String, PanelMode)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DeviceCall::ConfigurePanel { panel_id, mode, .. } => Some((panel_id, mode)),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DeviceCall::Alert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub fn saved_panels(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                DeviceCall::SavePanel { xml, .. } => Some(xml),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(PwaError::Xapi(XapiError::Closed))
        } else {
            Ok(())
        }
    }

    fn record(&self, call: DeviceCall) -> Result<()> {
        self.check()?;
        self.state.lock().unwrap().calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl RoomDevice for RecordingDevice {
    async fn connected_devices(&self) -> Result<Vec<ConnectedDevice>> {
        self.check()?;
        Ok(self.state.lock().unwrap().devices.clone())
    }

    async fn active_url(&self) -> Result<String> {
        self.check()?;
        Ok(self.state.lock().unwrap().active_url.clone())
    }

    async fn set_active_url(&self, url: &str) -> Result<()> {
        self.record(DeviceCall::SetActiveUrl(url.to_string()))?;
        self.state.lock().unwrap().active_url = url.to_string();
        Ok(())
    }

    async fn configure_panel(
        &self,
        panel_id: &str,
        location: PanelLocation,
        mode: PanelMode,
    ) -> Result<()> {
        self.record(DeviceCall::ConfigurePanel {
            panel_id: panel_id.to_string(),
            location,
            mode,
        })
    }

    async fn display_alert(&self, alert: &Alert) -> Result<()> {
        self.record(DeviceCall::Alert(alert.clone()))
    }

    async fn save_panel(&self, panel_id: &str, xml: &str) -> Result<()> {
        if self.failing_saves {
            return Err(PwaError::Xapi(XapiError::Rpc {
                code: 1,
                message: "Panel Save rejected".into(),
            }));
        }
        self.record(DeviceCall::SavePanel {
            panel_id: panel_id.to_string(),
            xml: xml.to_string(),
        })
    }

    async fn set_widget_value(&self, widget_id: &str, value: ToggleValue) -> Result<()> {
        self.record(DeviceCall::SetWidget {
            widget_id: widget_id.to_string(),
            value,
        })
    }

    async fn subscribe(&self, node: &str) -> Result<u64> {
        self.record(DeviceCall::Subscribe(node.to_string()))?;
        let mut state = self.state.lock().unwrap();
        state.next_subscription += 1;
        Ok(state.next_subscription)
    }
}
