//! The endpoint surface the controls depend on.

use async_trait::async_trait;
use pwa_common::{Alert, PanelMode, Result, ToggleValue};
use pwa_config::PanelLocation;
use serde::{Deserialize, Serialize};

/// One entry of `Status Peripherals ConnectedDevice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedDevice {
    /// Hardware id (`ID`), e.g. the navigator's MAC address.
    pub id: String,
    /// Product name (`Name`), e.g. `Cisco Room Navigator`.
    pub name: String,
    /// `Type`, e.g. `TouchPanel` or `PersistentWebApp`.
    pub device_type: String,
}

/// Everything the controls read from or do to the endpoint.
///
/// Reads are never cached by callers. Writes return once the endpoint has
/// accepted them; long-running effects (a panel changing mode) are not
/// awaited.
#[async_trait]
pub trait RoomDevice: Send + Sync {
    /// Currently attached peripherals.
    async fn connected_devices(&self) -> Result<Vec<ConnectedDevice>>;

    /// Current persistent web app URL; empty when unset.
    async fn active_url(&self) -> Result<String>;

    async fn set_active_url(&self, url: &str) -> Result<()>;

    /// Switch a touch panel between controller and web app mode.
    async fn configure_panel(
        &self,
        panel_id: &str,
        location: PanelLocation,
        mode: PanelMode,
    ) -> Result<()>;

    async fn display_alert(&self, alert: &Alert) -> Result<()>;

    /// Replace the whole UI extension panel `panel_id` with `xml`.
    async fn save_panel(&self, panel_id: &str, xml: &str) -> Result<()>;

    async fn set_widget_value(&self, widget_id: &str, value: ToggleValue) -> Result<()>;

    /// Register for feedback on `node`; returns the subscription id.
    async fn subscribe(&self, node: &str) -> Result<u64>;
}
