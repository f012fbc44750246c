//! Site and navigator controls for a RoomOS endpoint.
//!
//! Registers a status bar panel that lists the configured web sites and
//! every attached Room Navigator, keeps its toggles in line with the
//! endpoint's persistent web app URL and the navigators' modes, and acts on
//! toggle presses.

pub mod controller;
pub mod device;
pub mod panel;
pub mod subscriptions;
pub mod sync;
pub mod widgets;
pub mod xapi_device;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::Controller;
pub use device::{ConnectedDevice, RoomDevice};
pub use panel::PanelBuilder;
pub use subscriptions::Subscription;
pub use sync::{Synchronizer, ToggleOutcome, WidgetState, EXIT_MESSAGE, MODE_SWITCH_SECS};
