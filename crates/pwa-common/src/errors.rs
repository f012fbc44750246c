use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures talking to the endpoint's xAPI.
#[derive(Debug, thiserror::Error)]
pub enum XapiError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connection closed")]
    Closed,

    #[error("request timed out after {0}s: {1}")]
    Timeout(u64, String),

    #[error("xapi error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PwaError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Xapi(#[from] XapiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("panel error: {0}")]
    Panel(String),

    #[error("{0}")]
    Other(String),
}
