//! Error types shared across screenmap crates.

use std::string::FromUtf8Error;

/// Top-level error type for screenmap operations.
#[derive(Debug, thiserror::Error)]
pub enum ScreenmapError {
    /// The monitor-listing command could not be spawned or exited non-zero.
    #[error("External command `{command}` failed: {message}")]
    ExternalCommand { command: String, message: String },

    /// The command's stdout was not valid UTF-8.
    #[error("Output of `{command}` is not valid UTF-8")]
    Encoding {
        command: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using ScreenmapError.
pub type ScreenmapResult<T> = Result<T, ScreenmapError>;

impl ScreenmapError {
    pub fn external_command(command: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ExternalCommand {
            command: command.into(),
            message: msg.into(),
        }
    }

    pub fn encoding(command: impl Into<String>, source: FromUtf8Error) -> Self {
        Self::Encoding {
            command: command.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error came from invoking the external command.
    pub fn is_external_command(&self) -> bool {
        matches!(self, Self::ExternalCommand { .. })
    }
}
