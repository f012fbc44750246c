use crate::types::ToggleValue;

/// Something the endpoint reported through one of our subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A UI extension widget was operated.
    WidgetAction {
        widget_id: String,
        /// `changed`, `pressed`, `released`, `clicked`.
        action: String,
        /// Present for toggle widgets (`on` / `off`).
        value: Option<ToggleValue>,
    },
    /// The persistent web app URL configuration changed.
    ActiveUrlChanged { url: String },
    /// A peripheral was attached, detached or renamed.
    PeripheralsChanged,
    /// Free text sent to the device with `Message Send`.
    MessageReceived { text: String },
}

impl DeviceEvent {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DeviceEvent::WidgetAction { .. } => "widget_action",
            DeviceEvent::ActiveUrlChanged { .. } => "active_url_changed",
            DeviceEvent::PeripheralsChanged => "peripherals_changed",
            DeviceEvent::MessageReceived { .. } => "message_received",
        }
    }
}
