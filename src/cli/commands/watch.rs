//! Watch command implementation.
//!
//! The `getthis watch` command follows the editor's active document, read as
//! JSON lines from stdin, until the editor closes the stream.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::WatchArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::host::StdioHost;
use crate::orchestrator::{Orchestrator, OrchestratorState};
use crate::tracker::ActiveFileTracker;
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The watch command implementation.
pub struct WatchCommand {
    config: Option<PathBuf>,
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(config: Option<PathBuf>, args: WatchArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &WatchArgs {
        &self.args
    }

    /// Poll interval from the flag, falling back to the settings.
    fn poll_interval(&self, settings: &Settings) -> Duration {
        self.args
            .poll_interval
            .map(Duration::from_millis)
            .unwrap_or(settings.poll_interval)
    }
}

impl Command for WatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(self.config.as_deref())?;
        let settings = Settings::load(&store);
        let interval = self.poll_interval(&settings);

        let mut orchestrator = Orchestrator::new(store);
        if self.args.yes && !orchestrator.consent_granted() {
            orchestrator.grant_consent()?;
        }

        tracing::info!(
            "Watching active file ({} ms poll interval)",
            interval.as_millis()
        );

        let host = StdioHost::stdin();
        let mut tracker = ActiveFileTracker::new(interval);
        orchestrator.run(&mut tracker, &host, ui)?;

        // Declined at start, or consent withdrawn while watching.
        if orchestrator.state() != OrchestratorState::Active {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}
