//! Windows user environment persistence.
//!
//! Runs `setx THIS <path>`, which stores the variable in the user's registry
//! environment. Only shells started afterwards see the new value. Each call
//! spawns a console process, which may flash a window on some hosts.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use super::dotfile::VARIABLE_NAME;
use crate::error::{GetThisError, Result};

/// Persists `THIS` as a user-level environment variable.
#[derive(Debug, Clone)]
pub struct SessionWriter {
    program: OsString,
}

impl Default for SessionWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionWriter {
    /// Writer that uses the system `setx` command.
    pub fn new() -> Self {
        Self::with_program("setx")
    }

    /// Writer that invokes `program` with `setx`'s arguments.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Persist `value` for new sessions.
    pub fn write(&self, value: &str) -> Result<()> {
        let command = format!(
            "{} {} \"{}\"",
            self.program.to_string_lossy(),
            VARIABLE_NAME,
            value
        );
        tracing::debug!("Running {}", command);

        let output = Command::new(&self.program)
            .arg(VARIABLE_NAME)
            .arg(value)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| GetThisError::PlatformError {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = match (output.status.code(), stderr.is_empty()) {
                (Some(code), true) => format!("exit code {}", code),
                (Some(code), false) => format!("exit code {}: {}", code, stderr),
                (None, _) => "terminated by signal".to_string(),
            };
            return Err(GetThisError::PlatformError { command, message });
        }

        tracing::info!("Set user variable {}", VARIABLE_NAME);
        Ok(())
    }
}
