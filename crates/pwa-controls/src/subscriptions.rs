//! The feedback the controls listen to, and how each payload is decoded.

use pwa_common::{DeviceEvent, ToggleValue};
use pwa_xapi::path::dig;
use serde_json::Value;

use crate::xapi_device::{CONNECTED_DEVICE_PATH, WEB_APP_URL_PATH};

/// One of the four feedback subscriptions, established once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscription {
    WidgetAction,
    ActiveUrl,
    Peripherals,
    Message,
}

impl Subscription {
    pub const ALL: [Subscription; 4] = [
        Subscription::WidgetAction,
        Subscription::ActiveUrl,
        Subscription::Peripherals,
        Subscription::Message,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Subscription::WidgetAction => "Event/UserInterface/Extensions/Widget/Action",
            Subscription::ActiveUrl => WEB_APP_URL_PATH,
            Subscription::Peripherals => CONNECTED_DEVICE_PATH,
            Subscription::Message => "Event/Message/Send",
        }
    }

    /// Turn a feedback payload into an event, or `None` if it carries
    /// nothing this subscription acts on.
    pub fn decode(self, payload: &Value) -> Option<DeviceEvent> {
        match self {
            Subscription::WidgetAction => decode_widget_action(payload),
            Subscription::ActiveUrl => {
                let url = dig(payload, self.path())?;
                Some(DeviceEvent::ActiveUrlChanged {
                    url: url.as_str().unwrap_or_default().to_string(),
                })
            }
            Subscription::Peripherals => decode_peripherals(payload),
            Subscription::Message => {
                let text = dig(payload, "Event/Message/Send/Text")?.as_str()?;
                Some(DeviceEvent::MessageReceived {
                    text: text.to_string(),
                })
            }
        }
    }
}

fn decode_widget_action(payload: &Value) -> Option<DeviceEvent> {
    let action = dig(payload, Subscription::WidgetAction.path())?;
    let widget_id = action.get("WidgetId")?.as_str()?;
    Some(DeviceEvent::WidgetAction {
        widget_id: widget_id.to_string(),
        action: action
            .get("Type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        value: action
            .get("Value")
            .and_then(Value::as_str)
            .and_then(ToggleValue::parse),
    })
}

/// Keys whose change means a navigator appeared, left, was renamed or
/// switched mode. Other status churn (software upgrade progress and the
/// like) is not worth a rebuild.
const PERIPHERAL_KEYS: [&str; 4] = ["ID", "Name", "Type", "ghost"];

fn decode_peripherals(payload: &Value) -> Option<DeviceEvent> {
    let changed = dig(payload, CONNECTED_DEVICE_PATH)?;
    let entries: Vec<&Value> = match changed {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    entries
        .iter()
        .any(|entry| PERIPHERAL_KEYS.iter().any(|key| entry.get(key).is_some()))
        .then_some(DeviceEvent::PeripheralsChanged)
}
