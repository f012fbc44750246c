//! Declarative model of the UI extension panel.

use pwa_common::CompanionPanel;
use pwa_config::{ButtonConfig, SiteOption};

use crate::widgets::{site_widget_id, status_text_id};

/// Extension format version the endpoint is given.
pub const EXTENSIONS_VERSION: &str = "1.8";

pub const SITE_PAGE: &str = "Site Select";
pub const NAVIGATOR_PAGE: &str = "Navigator Select";
pub const NAVIGATOR_HEADER: &str = "Navigators mac";
pub const STATUS_TEXT: &str = "Controller / PWA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    ToggleButton,
    Text,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::ToggleButton => "ToggleButton",
            WidgetKind::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub id: String,
    /// Visible label; toggles carry none.
    pub name: Option<String>,
    pub kind: WidgetKind,
    pub options: String,
}

impl Widget {
    fn toggle(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind: WidgetKind::ToggleButton,
            options: "size=1".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub options: Option<String>,
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub rows: Vec<Row>,
}

/// A whole `Statusbar` panel as registered with `Panel Save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub panel_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub order: u32,
    pub pages: Vec<Page>,
}

impl PanelLayout {
    /// Lay out the site page and the navigator page for `panels`.
    pub fn build(button: &ButtonConfig, sites: &[SiteOption], panels: &[CompanionPanel]) -> Self {
        let site_rows = sites
            .iter()
            .enumerate()
            .map(|(i, site)| Row {
                name: site.label.clone(),
                options: Some("size=1".into()),
                widgets: vec![Widget::toggle(site_widget_id(&button.panel_id, i))],
            })
            .collect();

        let header = Row {
            name: NAVIGATOR_HEADER.into(),
            options: None,
            widgets: vec![Widget {
                id: status_text_id(&button.panel_id),
                name: Some(STATUS_TEXT.into()),
                kind: WidgetKind::Text,
                options: "size=2;fontSize=normal;align=right".into(),
            }],
        };
        let navigator_rows = std::iter::once(header)
            .chain(panels.iter().map(|panel| Row {
                name: panel.id.clone(),
                options: Some("size=4".into()),
                widgets: vec![Widget::toggle(panel.id.clone())],
            }))
            .collect();

        Self {
            panel_id: button.panel_id.clone(),
            name: button.name.clone(),
            icon: button.icon.clone(),
            color: button.color.clone(),
            order: button.order,
            pages: vec![
                Page {
                    name: SITE_PAGE.into(),
                    rows: site_rows,
                },
                Page {
                    name: NAVIGATOR_PAGE.into(),
                    rows: navigator_rows,
                },
            ],
        }
    }

    /// Ids of every toggle widget, in page order.
    pub fn toggle_ids(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| &page.rows)
            .flat_map(|row| &row.widgets)
            .filter(|w| w.kind == WidgetKind::ToggleButton)
            .map(|w| w.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwa_common::PanelMode;

    fn panel(id: &str, mode: PanelMode) -> CompanionPanel {
        CompanionPanel {
            id: id.into(),
            display_name: "Cisco Room Navigator".into(),
            mode,
        }
    }

    #[test]
    fn one_site_row_per_option() {
        let sites = vec![
            SiteOption::new("A", "https://a.example/"),
            SiteOption::new("B", "https://b.example/"),
        ];
        let layout = PanelLayout::build(&ButtonConfig::default(), &sites, &[]);

        let page = &layout.pages[0];
        assert_eq!(page.name, SITE_PAGE);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1].name, "B");
        assert_eq!(page.rows[1].widgets[0].id, "pwa-controls-site-1");
    }

    #[test]
    fn navigator_page_has_header_then_panels() {
        let panels = vec![
            panel("P1", PanelMode::Controller),
            panel("P2", PanelMode::PersistentWebApp),
        ];
        let layout = PanelLayout::build(&ButtonConfig::default(), &[], &panels);

        let page = &layout.pages[1];
        assert_eq!(page.name, NAVIGATOR_PAGE);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.rows[0].widgets[0].kind, WidgetKind::Text);
        assert_eq!(page.rows[0].widgets[0].id, "pwa-controls-status-text");
        assert_eq!(page.rows[1].name, "P1");
        assert_eq!(page.rows[2].widgets[0].id, "P2");
    }

    #[test]
    fn no_panels_leaves_only_the_header() {
        let layout = PanelLayout::build(&ButtonConfig::default(), &[], &[]);
        assert_eq!(layout.pages[1].rows.len(), 1);
    }

    #[test]
    fn toggle_ids_skip_text_widgets() {
        let sites = vec![SiteOption::new("A", "https://a.example/")];
        let panels = vec![panel("P1", PanelMode::Controller)];
        let layout = PanelLayout::build(&ButtonConfig::default(), &sites, &panels);

        let ids: Vec<&str> = layout.toggle_ids().collect();
        assert_eq!(ids, vec!["pwa-controls-site-0", "P1"]);
    }

    #[test]
    fn panel_attributes_come_from_button_config() {
        let button = ButtonConfig {
            name: "Kiosk".into(),
            icon: "Home".into(),
            panel_id: "kiosk".into(),
            color: "#112233".into(),
            order: 4,
        };
        let layout = PanelLayout::build(&button, &[], &[]);
        assert_eq!(layout.panel_id, "kiosk");
        assert_eq!(layout.name, "Kiosk");
        assert_eq!(layout.icon, "Home");
        assert_eq!(layout.color, "#112233");
        assert_eq!(layout.order, 4);
    }
}
