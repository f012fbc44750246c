pub mod errors;
pub mod events;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, PwaError, XapiError};
pub use events::DeviceEvent;
pub use notifications::Alert;
pub use types::{CompanionPanel, PanelMode, ToggleValue};

pub type Result<T> = std::result::Result<T, PwaError>;
