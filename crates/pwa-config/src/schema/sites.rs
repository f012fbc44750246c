use serde::{Deserialize, Serialize};

/// A web app the user can send to the companion panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    #[serde(alias = "text")]
    pub label: String,
    pub url: String,
}

impl SiteOption {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

pub(crate) fn default_sites() -> Vec<SiteOption> {
    vec![
        SiteOption::new("Example", "https://example.com/"),
        SiteOption::new(
            "Presence on device",
            "https://wxsd-sales.github.io/presence-on-device/",
        ),
        SiteOption::new("Google", "https://www.google.com"),
    ]
}
