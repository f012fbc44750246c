//! `RoomDevice` over a live xAPI connection.

use async_trait::async_trait;
use pwa_common::{Alert, PanelMode, Result, ToggleValue, XapiError};
use pwa_config::PanelLocation;
use pwa_xapi::XapiClient;
use serde_json::{json, Value};

use crate::device::{ConnectedDevice, RoomDevice};

pub const CONNECTED_DEVICE_PATH: &str = "Status/Peripherals/ConnectedDevice";
pub const WEB_APP_URL_PATH: &str = "Configuration/UserInterface/HomeScreen/Peripherals/WebApp/URL";

const TOUCH_PANEL_CONFIGURE: &str = "Peripherals TouchPanel Configure";
const ALERT_DISPLAY: &str = "UserInterface Message Alert Display";
const PANEL_SAVE: &str = "UserInterface Extensions Panel Save";
const WIDGET_SET_VALUE: &str = "UserInterface Extensions Widget SetValue";

/// Parse an `xGet` result for `ConnectedDevice`.
///
/// The node is a list; a lone object is treated as a one-element list.
/// Entries without an `ID` are skipped.
pub fn parse_connected_devices(value: &Value) -> Vec<ConnectedDevice> {
    let entries: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.get("ID").and_then(Value::as_str)?;
            let field = |key: &str| {
                entry
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Some(ConnectedDevice {
                id: id.to_string(),
                name: field("Name"),
                device_type: field("Type"),
            })
        })
        .collect()
}

/// The endpoint answers `xGet` on an empty list node with a "No match" error.
fn is_empty_node(err: &XapiError) -> bool {
    matches!(err, XapiError::Rpc { message, .. } if message.contains("No match"))
}

#[async_trait]
impl RoomDevice for XapiClient {
    async fn connected_devices(&self) -> Result<Vec<ConnectedDevice>> {
        match self.get(CONNECTED_DEVICE_PATH).await {
            Ok(value) => Ok(parse_connected_devices(&value)),
            Err(e) if is_empty_node(&e) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn active_url(&self) -> Result<String> {
        let value = self.get(WEB_APP_URL_PATH).await?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    async fn set_active_url(&self, url: &str) -> Result<()> {
        self.set(WEB_APP_URL_PATH, url).await?;
        Ok(())
    }

    async fn configure_panel(
        &self,
        panel_id: &str,
        location: PanelLocation,
        mode: PanelMode,
    ) -> Result<()> {
        self.command(
            TOUCH_PANEL_CONFIGURE,
            json!({
                "ID": panel_id,
                "Location": location.as_str(),
                "Mode": mode.as_str(),
            }),
        )
        .await?;
        Ok(())
    }

    async fn display_alert(&self, alert: &Alert) -> Result<()> {
        self.command(
            ALERT_DISPLAY,
            json!({
                "Title": alert.title,
                "Text": alert.text,
                "Duration": alert.duration_secs(),
            }),
        )
        .await?;
        Ok(())
    }

    async fn save_panel(&self, panel_id: &str, xml: &str) -> Result<()> {
        self.command_with_body(PANEL_SAVE, json!({ "PanelId": panel_id }), xml)
            .await?;
        Ok(())
    }

    async fn set_widget_value(&self, widget_id: &str, value: ToggleValue) -> Result<()> {
        self.command(
            WIDGET_SET_VALUE,
            json!({ "WidgetId": widget_id, "Value": value.as_str() }),
        )
        .await?;
        Ok(())
    }

    async fn subscribe(&self, node: &str) -> Result<u64> {
        Ok(XapiClient::subscribe(self, node, false).await?)
    }
}
