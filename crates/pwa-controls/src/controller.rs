//! Event dispatch.
//!
//! Subscribes once, then handles feedback strictly one event at a time in
//! arrival order. A failing handler is logged and the next event is taken;
//! only a lost connection ends the loop.

use std::collections::HashMap;
use std::sync::Arc;

use pwa_common::{DeviceEvent, PwaError, Result, XapiError};
use pwa_config::PwaConfig;
use pwa_xapi::{SubscriptionId, XapiEvent};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::device::RoomDevice;
use crate::panel::PanelBuilder;
use crate::subscriptions::Subscription;
use crate::sync::Synchronizer;

pub struct Controller<D> {
    device: D,
    builder: PanelBuilder,
    sync: Synchronizer,
    subscriptions: HashMap<SubscriptionId, Subscription>,
}

impl<D: RoomDevice> Controller<D> {
    pub fn new(device: D, config: Arc<PwaConfig>) -> Self {
        Self {
            device,
            builder: PanelBuilder::new(Arc::clone(&config)),
            sync: Synchronizer::new(config),
            subscriptions: HashMap::new(),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Subscribe, register the panel and push the initial widget values.
    pub async fn start(&mut self) -> Result<()> {
        for subscription in Subscription::ALL {
            let id = self.device.subscribe(subscription.path()).await?;
            debug!(?subscription, id, "Feedback registered");
            self.subscriptions.insert(id, subscription);
        }
        self.rebuild().await
    }

    /// Replace the panel for the navigators attached right now, then sync.
    pub async fn rebuild(&self) -> Result<()> {
        let panels = self.sync.list_panels(&self.device).await?;
        self.builder.register(&self.device, &panels).await?;
        self.sync.synchronize(&self.device).await?;
        Ok(())
    }

    /// Map a feedback notification to an event.
    pub fn decode(&self, subscription: SubscriptionId, payload: &Value) -> Option<DeviceEvent> {
        let Some(kind) = self.subscriptions.get(&subscription) else {
            debug!(subscription, "Feedback for unknown subscription");
            return None;
        };
        let event = kind.decode(payload);
        if event.is_none() {
            debug!(?kind, "Feedback ignored");
        }
        event
    }

    /// Run the handler for one event to completion.
    pub async fn handle(&self, event: &DeviceEvent) -> Result<()> {
        match event {
            DeviceEvent::WidgetAction {
                widget_id,
                action,
                value,
            } => {
                debug!(widget_id = %widget_id, action = %action, ?value, "Widget action");
                self.sync
                    .handle_toggle(&self.device, widget_id, *value)
                    .await?;
            }
            DeviceEvent::ActiveUrlChanged { url } => {
                info!(url = %url, "Active URL changed");
                self.sync.synchronize(&self.device).await?;
            }
            DeviceEvent::PeripheralsChanged => {
                info!("Peripherals changed, rebuilding panel");
                self.rebuild().await?;
            }
            DeviceEvent::MessageReceived { text } => {
                self.sync.handle_message(&self.device, text).await?;
            }
        }
        Ok(())
    }

    /// Dispatch until the connection goes away. Always returns an error.
    pub async fn run(&self, events: &mut mpsc::UnboundedReceiver<XapiEvent>) -> Result<()> {
        while let Some(event) = events.recv().await {
            match event {
                XapiEvent::Feedback {
                    subscription,
                    payload,
                } => {
                    let Some(event) = self.decode(subscription, &payload) else {
                        continue;
                    };
                    if let Err(e) = self.handle(&event).await {
                        warn!(event = event.kind(), error = %e, "Handler failed");
                    }
                }
                XapiEvent::Disconnected { reason } => {
                    warn!(reason = %reason, "Device connection lost");
                    return Err(PwaError::Xapi(XapiError::Closed));
                }
            }
        }
        Err(PwaError::Xapi(XapiError::Closed))
    }
}
