//! Connection settings for the room endpoint.

use serde::{Deserialize, Serialize};

/// How to reach the endpoint's xAPI WebSocket.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Hostname or IP address of the endpoint.
    pub host: String,
    /// Local user with the `Integrator` or `Admin` role.
    pub username: String,
    /// Password for `username`. `PWA_DEVICE_PASSWORD` takes precedence.
    pub password: String,
    /// Use `wss://` (the endpoint only serves `ws://` when HTTP mode allows it).
    pub secure: bool,
    /// Endpoints ship with self-signed certificates.
    pub accept_invalid_certs: bool,
    /// Seconds to wait for a reply to any single request (valid range: 1-120).
    pub request_timeout_secs: u32,
    /// Seconds between WebSocket pings; 0 disables (valid range: 0-3600).
    pub keepalive_interval_secs: u32,
}

impl std::fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("secure", &self.secure)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("keepalive_interval_secs", &self.keepalive_interval_secs)
            .finish()
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: "admin".into(),
            password: String::new(),
            secure: true,
            accept_invalid_certs: true,
            request_timeout_secs: 10,
            keepalive_interval_secs: 30,
        }
    }
}

impl DeviceConfig {
    /// WebSocket URL of the xAPI endpoint.
    pub fn ws_url(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{scheme}://{}/ws", self.host)
    }
}
