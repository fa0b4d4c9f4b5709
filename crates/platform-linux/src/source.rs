//! Monitor sources: where the raw listing text comes from.

use std::process::Command;

use screenmap_common::config::SourceConfig;
use screenmap_common::error::{ScreenmapError, ScreenmapResult};

/// Something that yields the raw bytes of a monitor listing.
pub trait MonitorSource {
    /// Human-readable description, used in errors and logs.
    fn describe(&self) -> &str;

    /// Capture the complete listing. Each call re-queries the system.
    fn capture(&self) -> ScreenmapResult<Vec<u8>>;
}

/// Runs a command line through a shell and captures its stdout.
#[derive(Debug, Clone)]
pub struct ShellCommandSource {
    shell: String,
    command: String,
}

impl ShellCommandSource {
    pub fn new(shell: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            command: command.into(),
        }
    }

    /// `sh -c "xrandr --listmonitors"`.
    pub fn xrandr() -> Self {
        Self::from_config(&SourceConfig::default())
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.shell, &config.command)
    }
}

impl MonitorSource for ShellCommandSource {
    fn describe(&self) -> &str {
        &self.command
    }

    fn capture(&self) -> ScreenmapResult<Vec<u8>> {
        tracing::debug!(shell = %self.shell, command = %self.command, "Running monitor listing");

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&self.command)
            .output()
            .map_err(|e| {
                ScreenmapError::external_command(
                    &self.command,
                    format!("could not spawn `{}`: {e}", self.shell),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            };
            return Err(ScreenmapError::external_command(&self.command, message));
        }

        tracing::debug!(bytes = output.stdout.len(), "Captured monitor listing");
        Ok(output.stdout)
    }
}

/// Serves a fixed listing; used for fixtures and offline runs.
#[derive(Debug, Clone)]
pub struct StaticSource {
    label: String,
    bytes: Vec<u8>,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new("static listing", text)
    }
}

impl MonitorSource for StaticSource {
    fn describe(&self) -> &str {
        &self.label
    }

    fn capture(&self) -> ScreenmapResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
