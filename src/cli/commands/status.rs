//! Status command implementation.
//!
//! The `getthis status` command shows where `THIS` is written on this machine
//! and the value last propagated to the integrated terminal.

use std::path::PathBuf;

use serde_json::json;

use crate::cli::args::StatusArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::host::terminal_env;
use crate::orchestrator::{Orchestrator, Target};
use crate::shell::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    config: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(config: Option<PathBuf>, args: StatusArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(self.config.as_deref())?;
        let settings_path = store.path().to_path_buf();
        let settings = Settings::load(&store);

        let platform = match Platform::current() {
            Ok(platform) => platform,
            Err(e) => {
                ui.report(&e);
                return Ok(CommandResult::failure(1));
            }
        };

        let value = terminal_env::read(&store, platform);
        let orchestrator = Orchestrator::new(store);
        let target = match orchestrator.target() {
            Ok(Target::Dotfile { path, .. }) => path.display().to_string(),
            Ok(Target::Session) => "user environment (setx)".to_string(),
            Err(e) => format!("unavailable: {}", e),
        };
        let consent = if platform.requires_consent() {
            json!(settings.dotfile_consent)
        } else {
            json!(null)
        };

        if self.args.json {
            let status = json!({
                "platform": platform.name(),
                "shell": orchestrator.dialect().name(),
                "target": target,
                "consent": consent,
                "this": value,
                "pollIntervalMs": settings.poll_interval.as_millis() as u64,
                "settings": settings_path.display().to_string(),
            });
            ui.message(&serde_json::to_string_pretty(&status).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        ui.message(&format!("Platform:  {}", platform));
        ui.message(&format!("Shell:     {}", orchestrator.dialect().name()));
        ui.message(&format!("Target:    {}", target));
        if platform.requires_consent() {
            let allowed = if settings.dotfile_consent { "granted" } else { "not granted" };
            ui.message(&format!("Consent:   {}", allowed));
        }
        ui.message(&format!(
            "THIS:      {}",
            value.as_deref().unwrap_or("(not set yet)")
        ));
        ui.message(&format!("Settings:  {}", settings_path.display()));

        Ok(CommandResult::success())
    }
}
