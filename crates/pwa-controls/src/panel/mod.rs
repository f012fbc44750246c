//! The "PWA Controls" status bar panel.
//!
//! The panel is always rebuilt and replaced in full: one page of site
//! toggles, one page with a toggle per attached navigator.

pub mod layout;
pub mod render;

use std::sync::Arc;

use pwa_common::{CompanionPanel, Result};
use pwa_config::PwaConfig;
use tracing::info;

use crate::device::RoomDevice;
pub use layout::PanelLayout;
pub use render::render;

/// Builds and registers the panel for the current set of navigators.
pub struct PanelBuilder {
    config: Arc<PwaConfig>,
}

impl PanelBuilder {
    pub fn new(config: Arc<PwaConfig>) -> Self {
        Self { config }
    }

    pub fn layout(&self, panels: &[CompanionPanel]) -> PanelLayout {
        PanelLayout::build(&self.config.button, &self.config.sites, panels)
    }

    /// The panel XML for `panels`.
    pub fn render(&self, panels: &[CompanionPanel]) -> Result<String> {
        render(&self.layout(panels))
    }

    /// Replace the registered panel with one listing `panels`.
    pub async fn register<D: RoomDevice + ?Sized>(
        &self,
        device: &D,
        panels: &[CompanionPanel],
    ) -> Result<()> {
        let xml = self.render(panels)?;
        device.save_panel(&self.config.button.panel_id, &xml).await?;
        info!(
            panel_id = %self.config.button.panel_id,
            sites = self.config.sites.len(),
            navigators = panels.len(),
            "Panel registered"
        );
        Ok(())
    }
}
