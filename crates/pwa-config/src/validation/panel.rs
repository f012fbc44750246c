//! Validation for the `[button]`, `[navigator]` and `[alerts]` sections.

use std::sync::OnceLock;

use regex::Regex;

use crate::schema::PwaConfig;

use super::helpers::{validate_non_empty, validate_range};

fn panel_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"))
}

fn color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"))
}

pub(crate) fn validate_button(errors: &mut Vec<String>, config: &PwaConfig) {
    let button = &config.button;
    validate_non_empty(errors, "button.name", &button.name);
    validate_non_empty(errors, "button.icon", &button.icon);
    if !panel_id_pattern().is_match(&button.panel_id) {
        errors.push(format!(
            "button.panel_id = {:?} may only contain letters, digits, '-' and '_'",
            button.panel_id
        ));
    }
    if !color_pattern().is_match(&button.color) {
        errors.push(format!(
            "button.color = {:?} is not a #RRGGBB colour",
            button.color
        ));
    }
}

pub(crate) fn validate_navigator(errors: &mut Vec<String>, config: &PwaConfig) {
    validate_non_empty(errors, "navigator.name_suffix", &config.navigator.name_suffix);
}

pub(crate) fn validate_alerts(errors: &mut Vec<String>, config: &PwaConfig) {
    validate_range(
        errors,
        "alerts.duration_secs",
        config.alerts.duration_secs,
        1,
        300,
    );
}
