use serde::{Deserialize, Serialize};

/// The status-bar button and the panel it opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Label on the button; also the title of alerts.
    pub name: String,
    /// Built-in icon name (e.g. `Sliders`, `Tv`, `Blinds`).
    pub icon: String,
    /// Panel id; prefixes every widget id we own.
    pub panel_id: String,
    /// Button colour as `#RRGGBB`.
    pub color: String,
    /// Position among custom panels.
    pub order: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            name: "PWA Controls".into(),
            icon: "Sliders".into(),
            panel_id: "pwa-controls".into(),
            color: "#CF7900".into(),
            order: 1,
        }
    }
}
