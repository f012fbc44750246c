//! Validation for the `[device]` section.

use crate::schema::PwaConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_device(errors: &mut Vec<String>, config: &PwaConfig) {
    let device = &config.device;
    validate_non_empty(errors, "device.host", &device.host);
    if device.host.contains('/') || device.host.contains(char::is_whitespace) {
        errors.push(format!(
            "device.host = {:?} must be a bare hostname or address",
            device.host
        ));
    }
    validate_non_empty(errors, "device.username", &device.username);
    validate_range(
        errors,
        "device.request_timeout_secs",
        device.request_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "device.keepalive_interval_secs",
        device.keepalive_interval_secs,
        0,
        3600,
    );
}
