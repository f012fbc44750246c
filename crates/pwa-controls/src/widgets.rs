//! Widget identifiers and the site match rule.

/// Widget id of the site toggle at `index`.
pub fn site_widget_id(panel_id: &str, index: usize) -> String {
    format!("{panel_id}-site-{index}")
}

/// Site index encoded in `widget_id`, if it is one of this panel's site toggles.
pub fn site_index(panel_id: &str, widget_id: &str) -> Option<usize> {
    let rest = widget_id.strip_prefix(panel_id)?.strip_prefix("-site-")?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Widget id of the "Controller / PWA" header text.
pub fn status_text_id(panel_id: &str) -> String {
    format!("{panel_id}-status-text")
}

/// Whether a site counts as the one currently shown.
///
/// Containment: an active URL that carries extra path or query after the
/// site URL still matches.
pub fn site_matches(active_url: &str, site_url: &str) -> bool {
    !active_url.is_empty() && !site_url.is_empty() && active_url.contains(site_url)
}
