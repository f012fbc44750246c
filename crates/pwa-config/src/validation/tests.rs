//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

fn valid_config() -> PwaConfig {
    let mut config = PwaConfig::default();
    config.device.host = "10.0.0.10".into();
    config
}

#[test]
fn default_config_with_host_validates() {
    assert!(validate(&valid_config()).is_ok());
}

#[test]
fn default_config_requires_host() {
    let err = validate(&PwaConfig::default()).unwrap_err().to_string();
    assert!(err.contains("device.host"));
}

#[test]
fn catches_host_with_scheme() {
    let mut config = valid_config();
    config.device.host = "https://10.0.0.10/".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bare hostname"));
}

#[test]
fn catches_request_timeout_zero() {
    let mut config = valid_config();
    config.device.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("device.request_timeout_secs"));
}

#[test]
fn keepalive_zero_is_allowed() {
    let mut config = valid_config();
    config.device.keepalive_interval_secs = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_panel_id() {
    let mut config = valid_config();
    config.button.panel_id = "pwa controls!".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("button.panel_id"));
}

#[test]
fn catches_bad_color() {
    let mut config = valid_config();
    config.button.color = "orange".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("button.color"));
}

#[test]
fn catches_empty_navigator_suffix() {
    let mut config = valid_config();
    config.navigator.name_suffix = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("navigator.name_suffix"));
}

#[test]
fn catches_alert_duration_out_of_range() {
    let mut config = valid_config();
    config.alerts.duration_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("alerts.duration_secs"));
}

#[test]
fn catches_empty_sites() {
    let mut config = valid_config();
    config.sites.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at least one site"));
}

#[test]
fn catches_site_without_scheme() {
    let mut config = valid_config();
    config.sites = vec![SiteOption::new("Bad", "example.com")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sites[0].url"));
}

#[test]
fn catches_empty_site_label() {
    let mut config = valid_config();
    config.sites = vec![SiteOption::new("", "https://example.com/")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sites[0].label"));
}

#[test]
fn catches_duplicate_site_url() {
    let mut config = valid_config();
    config.sites = vec![
        SiteOption::new("A", "https://a.example/"),
        SiteOption::new("A again", "https://a.example/"),
    ];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("sites[1].url"));
    assert!(err.contains("listed twice"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PwaConfig::default();
    config.button.color = "red".into();
    config.alerts.duration_secs = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("device.host"));
    assert!(err.contains("button.color"));
    assert!(err.contains("alerts.duration_secs"));
}

#[test]
fn overlapping_sites_reports_prefixes() {
    let sites = vec![
        SiteOption::new("Root", "https://a.example/"),
        SiteOption::new("Deep", "https://a.example/board"),
        SiteOption::new("Other", "https://b.example/"),
    ];
    assert_eq!(overlapping_sites(&sites), vec![(0, 1)]);
}

#[test]
fn overlapping_sites_empty_for_distinct_urls() {
    let sites = vec![
        SiteOption::new("A", "https://a.example/"),
        SiteOption::new("B", "https://b.example/"),
    ];
    assert!(overlapping_sites(&sites).is_empty());
}
