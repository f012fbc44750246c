//! Keeps the panel's toggles in line with the endpoint and turns toggle
//! presses into commands.
//!
//! Nothing is cached between calls: every pass re-reads the active URL and
//! the attached navigators, then pushes every widget value.

use std::sync::Arc;
use std::time::Duration;

use pwa_common::{Alert, CompanionPanel, PanelMode, Result, ToggleValue};
use pwa_config::PwaConfig;
use tracing::{debug, info};

use crate::device::RoomDevice;
use crate::widgets::{site_index, site_matches, site_widget_id};

/// Roughly how long a navigator takes to switch mode.
pub const MODE_SWITCH_SECS: u64 = 20;

/// In-band message that sends every navigator back to controller mode.
pub const EXIT_MESSAGE: &str = "ExitPWA";

/// A value pushed to one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub widget_id: String,
    pub value: ToggleValue,
}

impl WidgetState {
    fn new(widget_id: impl Into<String>, value: ToggleValue) -> Self {
        Self {
            widget_id: widget_id.into(),
            value,
        }
    }
}

/// What a toggle press resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    SiteSelected { index: usize },
    ModeRequested { panel_id: String, mode: PanelMode },
    Ignored,
}

pub struct Synchronizer {
    config: Arc<PwaConfig>,
}

impl Synchronizer {
    pub fn new(config: Arc<PwaConfig>) -> Self {
        Self { config }
    }

    /// Attached navigators, filtered by the configured name suffix.
    pub async fn list_panels<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
    ) -> Result<Vec<CompanionPanel>> {
        let devices = device.connected_devices().await?;
        Ok(devices
            .into_iter()
            .filter(|d| self.config.navigator.matches(&d.name))
            .map(|d| CompanionPanel {
                mode: PanelMode::from_device_type(&d.device_type),
                id: d.id,
                display_name: d.name,
            })
            .collect())
    }

    /// Site toggle values for `active_url`.
    pub fn site_states(&self, active_url: &str) -> Vec<WidgetState> {
        let panel_id = &self.config.button.panel_id;
        self.config
            .sites
            .iter()
            .enumerate()
            .map(|(i, site)| {
                WidgetState::new(
                    site_widget_id(panel_id, i),
                    ToggleValue::from_bool(site_matches(active_url, &site.url)),
                )
            })
            .collect()
    }

    /// Navigator toggle values: `on` while in web app mode.
    pub fn panel_states(panels: &[CompanionPanel]) -> Vec<WidgetState> {
        panels
            .iter()
            .map(|p| {
                WidgetState::new(
                    p.id.clone(),
                    ToggleValue::from_bool(p.mode == PanelMode::PersistentWebApp),
                )
            })
            .collect()
    }

    /// Read the endpoint and push every widget value. Returns what was pushed.
    pub async fn synchronize<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
    ) -> Result<Vec<WidgetState>> {
        let active_url = device.active_url().await?;
        let panels = self.list_panels(device).await?;

        let mut states = self.site_states(&active_url);
        states.extend(Self::panel_states(&panels));

        for state in &states {
            device
                .set_widget_value(&state.widget_id, state.value)
                .await?;
        }

        debug!(
            active_url = %active_url,
            widgets = states.len(),
            "Widgets synchronized"
        );
        Ok(states)
    }

    /// Act on a toggle press.
    ///
    /// A site toggle selects that site whatever its value. A navigator
    /// toggle switches that navigator's mode. Anything else is ignored.
    pub async fn handle_toggle<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
        widget_id: &str,
        value: Option<ToggleValue>,
    ) -> Result<ToggleOutcome> {
        if let Some(index) = site_index(&self.config.button.panel_id, widget_id) {
            let Some(site) = self.config.sites.get(index) else {
                debug!(widget_id, "Toggle for unknown site index ignored");
                return Ok(ToggleOutcome::Ignored);
            };
            device.set_active_url(&site.url).await?;
            info!(site = %site.label, url = %site.url, "Site selected");
            return Ok(ToggleOutcome::SiteSelected { index });
        }

        let panels = self.list_panels(device).await?;
        let Some(panel) = panels.iter().find(|p| p.id == widget_id) else {
            debug!(widget_id, "Toggle for unknown widget ignored");
            return Ok(ToggleOutcome::Ignored);
        };
        let Some(value) = value else {
            debug!(widget_id, "Navigator toggle without a value ignored");
            return Ok(ToggleOutcome::Ignored);
        };

        let mode = PanelMode::from_toggle(value);
        self.switch_mode(device, panel, mode).await?;
        Ok(ToggleOutcome::ModeRequested {
            panel_id: panel.id.clone(),
            mode,
        })
    }

    /// Act on free text sent to the endpoint. Returns how many navigators
    /// were told to leave web app mode.
    pub async fn handle_message<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
        text: &str,
    ) -> Result<usize> {
        if text != EXIT_MESSAGE {
            debug!(text, "Message ignored");
            return Ok(0);
        }

        let panels = self.list_panels(device).await?;
        let mut switched = 0;
        for panel in panels
            .iter()
            .filter(|p| p.mode == PanelMode::PersistentWebApp)
        {
            self.switch_mode(device, panel, PanelMode::Controller)
                .await?;
            switched += 1;
        }
        info!(switched, "Exit requested");
        Ok(switched)
    }

    /// Ask for a mode change and tell the room it is coming. Not awaited:
    /// the navigator reports its new type once it has restarted.
    async fn switch_mode<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
        panel: &CompanionPanel,
        mode: PanelMode,
    ) -> Result<()> {
        device
            .configure_panel(&panel.id, self.config.navigator.location, mode)
            .await?;
        device.display_alert(&self.mode_alert(&panel.id, mode)).await?;
        info!(
            panel_id = %panel.id,
            name = %panel.display_name,
            from = %panel.mode,
            to = %mode,
            "Navigator mode change requested"
        );
        Ok(())
    }

    fn mode_alert(&self, panel_id: &str, mode: PanelMode) -> Alert {
        Alert::new(
            self.config.button.name.clone(),
            format!("Setting {panel_id} to {mode} mode, this will take {MODE_SWITCH_SECS} seconds"),
            Duration::from_secs(u64::from(self.config.alerts.duration_secs)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{config_with_sites, DeviceCall, RecordingDevice};
    use pwa_config::PanelLocation;

    fn two_sites() -> Arc<PwaConfig> {
        config_with_sites(&[("A", "https://a.example/"), ("B", "https://b.example/")])
    }

    #[tokio::test]
    async fn list_panels_keeps_navigators_with_their_names() {
        let device = RecordingDevice::new()
            .with_device("P1", "Cisco Room Navigator", "PersistentWebApp")
            .with_device("P2", "Lobby Room Navigator", "TouchPanel")
            .with_device("X1", "Cisco Desk Camera", "Camera");
        let sync = Synchronizer::new(two_sites());

        let panels = sync.list_panels(&device).await.unwrap();

        assert_eq!(
            panels,
            vec![
                CompanionPanel {
                    id: "P1".into(),
                    display_name: "Cisco Room Navigator".into(),
                    mode: PanelMode::PersistentWebApp,
                },
                CompanionPanel {
                    id: "P2".into(),
                    display_name: "Lobby Room Navigator".into(),
                    mode: PanelMode::Controller,
                },
            ]
        );
    }

    #[tokio::test]
    async fn active_url_selects_matching_site() {
        let device = RecordingDevice::new().with_active_url("https://a.example/");
        let sync = Synchronizer::new(two_sites());

        sync.synchronize(&device).await.unwrap();

        assert_eq!(
            device.widget_values(),
            vec![
                ("pwa-controls-site-0".to_string(), ToggleValue::On),
                ("pwa-controls-site-1".to_string(), ToggleValue::Off),
            ]
        );
    }

    #[tokio::test]
    async fn no_match_turns_every_site_off() {
        let device = RecordingDevice::new().with_active_url("https://elsewhere.example/");
        let sync = Synchronizer::new(two_sites());

        let states = sync.synchronize(&device).await.unwrap();
        assert!(states.iter().all(|s| s.value == ToggleValue::Off));
    }

    #[tokio::test]
    async fn empty_active_url_turns_every_site_off() {
        let device = RecordingDevice::new();
        let sync = Synchronizer::new(two_sites());

        let states = sync.synchronize(&device).await.unwrap();
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|s| s.value == ToggleValue::Off));
    }

    #[tokio::test]
    async fn panel_toggles_follow_mode() {
        let device = RecordingDevice::new()
            .with_navigator("P1", PanelMode::Controller)
            .with_navigator("P2", PanelMode::PersistentWebApp)
            .with_device("X1", "Cisco Desk Camera", "Camera");
        let sync = Synchronizer::new(two_sites());

        sync.synchronize(&device).await.unwrap();

        let values = device.widget_values();
        assert_eq!(values.len(), 4);
        assert_eq!(values[2], ("P1".to_string(), ToggleValue::Off));
        assert_eq!(values[3], ("P2".to_string(), ToggleValue::On));
    }

    #[tokio::test]
    async fn synchronize_is_idempotent() {
        let device = RecordingDevice::new()
            .with_active_url("https://b.example/")
            .with_navigator("P1", PanelMode::PersistentWebApp);
        let sync = Synchronizer::new(two_sites());

        sync.synchronize(&device).await.unwrap();
        let first = device.take_calls();
        sync.synchronize(&device).await.unwrap();
        let second = device.take_calls();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn site_toggle_sets_url_whatever_the_value() {
        let sync = Synchronizer::new(two_sites());

        for value in [Some(ToggleValue::On), Some(ToggleValue::Off), None] {
            let device = RecordingDevice::new();
            let outcome = sync
                .handle_toggle(&device, "pwa-controls-site-1", value)
                .await
                .unwrap();

            assert_eq!(outcome, ToggleOutcome::SiteSelected { index: 1 });
            assert_eq!(
                device.calls(),
                vec![DeviceCall::SetActiveUrl("https://b.example/".into())]
            );
        }
    }

    #[tokio::test]
    async fn navigator_toggle_requests_mode_and_alerts_once() {
        let device = RecordingDevice::new().with_navigator("P1", PanelMode::Controller);
        let sync = Synchronizer::new(two_sites());

        let outcome = sync
            .handle_toggle(&device, "P1", Some(ToggleValue::On))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            ToggleOutcome::ModeRequested {
                panel_id: "P1".into(),
                mode: PanelMode::PersistentWebApp,
            }
        );
        let calls = device.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            DeviceCall::ConfigurePanel {
                panel_id: "P1".into(),
                location: PanelLocation::InsideRoom,
                mode: PanelMode::PersistentWebApp,
            }
        );
        match &calls[1] {
            DeviceCall::Alert(alert) => {
                assert_eq!(alert.title, "PWA Controls");
                assert_eq!(
                    alert.text,
                    "Setting P1 to PersistentWebApp mode, this will take 20 seconds"
                );
                assert_eq!(alert.duration_secs(), 20);
            }
            other => panic!("expected alert, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn navigator_toggle_off_requests_controller() {
        let device = RecordingDevice::new().with_navigator("P1", PanelMode::PersistentWebApp);
        let sync = Synchronizer::new(two_sites());

        sync.handle_toggle(&device, "P1", Some(ToggleValue::Off))
            .await
            .unwrap();

        assert_eq!(
            device.configured_modes(),
            vec![("P1".to_string(), PanelMode::Controller)]
        );
    }

    #[tokio::test]
    async fn unknown_widget_is_ignored() {
        let device = RecordingDevice::new().with_navigator("P1", PanelMode::Controller);
        let sync = Synchronizer::new(two_sites());

        for id in ["P9", "pwa-controls-site-7", "pwa-controls-status-text"] {
            let outcome = sync
                .handle_toggle(&device, id, Some(ToggleValue::On))
                .await
                .unwrap();
            assert_eq!(outcome, ToggleOutcome::Ignored);
        }
        assert!(device.calls().is_empty());
    }

    #[tokio::test]
    async fn exit_message_only_touches_web_app_panels() {
        let device = RecordingDevice::new()
            .with_navigator("P1", PanelMode::PersistentWebApp)
            .with_navigator("P2", PanelMode::Controller);
        let sync = Synchronizer::new(two_sites());

        let switched = sync.handle_message(&device, "ExitPWA").await.unwrap();

        assert_eq!(switched, 1);
        assert_eq!(
            device.configured_modes(),
            vec![("P1".to_string(), PanelMode::Controller)]
        );
        assert_eq!(device.alerts().len(), 1);
    }

    #[tokio::test]
    async fn other_messages_do_nothing() {
        let device = RecordingDevice::new().with_navigator("P1", PanelMode::PersistentWebApp);
        let sync = Synchronizer::new(two_sites());

        for text in ["exitpwa", "ExitPWA ", "hello", ""] {
            assert_eq!(sync.handle_message(&device, text).await.unwrap(), 0);
        }
        assert!(device.calls().is_empty());
    }

    #[tokio::test]
    async fn configured_location_is_used() {
        let mut config = (*two_sites()).clone();
        config.navigator.location = PanelLocation::OutsideRoom;
        let device = RecordingDevice::new().with_navigator("P1", PanelMode::Controller);
        let sync = Synchronizer::new(Arc::new(config));

        sync.handle_toggle(&device, "P1", Some(ToggleValue::On))
            .await
            .unwrap();

        assert!(matches!(
            device.calls()[0],
            DeviceCall::ConfigurePanel {
                location: PanelLocation::OutsideRoom,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn device_errors_propagate() {
        let device = RecordingDevice::new().failing();
        let sync = Synchronizer::new(two_sites());

        assert!(sync.synchronize(&device).await.is_err());
        assert!(sync
            .handle_toggle(&device, "pwa-controls-site-0", None)
            .await
            .is_err());
    }
}
