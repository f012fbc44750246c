//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# PWA Controls configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The file is read once at start-up; restart to apply changes.

[device]
host = ""                # hostname or IP of the room endpoint (required)
# username = "admin"
# password = ""          # or set PWA_DEVICE_PASSWORD
# secure = true          # wss:// (true) or ws:// (false)
# accept_invalid_certs = true
# request_timeout_secs = 10     # 1-120
# keepalive_interval_secs = 30  # 0-3600, 0 disables

[button]
# name = "PWA Controls"
# icon = "Sliders"
# panel_id = "pwa-controls"
# color = "#CF7900"
# order = 1

[navigator]
# name_suffix = "Room Navigator"
# location = "InsideRoom"       # InsideRoom, OutsideRoom

[alerts]
# duration_secs = 20     # 1-300

[logging]
# level = "info"         # trace, debug, info, warn, error

# Web apps offered on the "Site Select" page, in order.
[[sites]]
label = "Example"
url = "https://example.com/"

[[sites]]
label = "Presence on device"
url = "https://wxsd-sales.github.io/presence-on-device/"

[[sites]]
label = "Google"
url = "https://www.google.com"
"##
    .to_string()
}
