//! What each subcommand does.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use pwa_common::Result;
use pwa_config::{DeviceConfig, PwaConfig};
use pwa_controls::{Controller, PanelBuilder};
use pwa_xapi::{XapiClient, XapiConfig};
use tracing::info;

/// Transport settings for the configured endpoint.
pub fn xapi_config(device: &DeviceConfig) -> XapiConfig {
    XapiConfig {
        url: device.ws_url(),
        username: device.username.clone(),
        password: device.password.clone(),
        accept_invalid_certs: device.accept_invalid_certs,
        request_timeout: Duration::from_secs(u64::from(device.request_timeout_secs)),
        keepalive_interval: (device.keepalive_interval_secs > 0)
            .then(|| Duration::from_secs(u64::from(device.keepalive_interval_secs))),
    }
}

/// Connect, register the panel and dispatch events until Ctrl+C or the
/// connection drops.
pub async fn run(config: PwaConfig) -> Result<()> {
    let xapi = xapi_config(&config.device);
    info!(url = %xapi.url, user = %xapi.username, "Connecting to endpoint");
    let (client, mut events) = XapiClient::connect(xapi).await?;

    let mut controller = Controller::new(client.clone(), Arc::new(config));
    controller.start().await?;
    info!("Panel registered, waiting for events");

    tokio::select! {
        result = controller.run(&mut events) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            client.disconnect().await;
            Ok(())
        }
    }
}

/// Pretty JSON of the config, password redacted.
pub fn check(config: &PwaConfig) -> String {
    pwa_config::config_to_json(config)
}

/// Write the template to `path`, or the default location.
pub fn init(path: Option<&Path>) -> Result<std::path::PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => pwa_config::default_config_path()?,
    };
    pwa_config::create_default_config(&path)?;
    Ok(path)
}

/// Panel XML as registered with no navigators attached.
pub fn render(config: PwaConfig) -> Result<String> {
    PanelBuilder::new(Arc::new(config)).render(&[])
}
