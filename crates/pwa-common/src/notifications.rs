use std::time::Duration;

/// A transient alert shown on the endpoint's screen and touch controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub text: String,
    pub duration: Duration,
}

impl Alert {
    pub fn new(title: impl Into<String>, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            duration,
        }
    }

    /// Duration in whole seconds, as the device expects it.
    pub fn duration_secs(&self) -> u64 {
        self.duration.as_secs()
    }
}
