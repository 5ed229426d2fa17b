//! Set command implementation.
//!
//! The `getthis set <PATH>` command propagates one path, for editors that run
//! a command on focus change instead of keeping `getthis watch` alive.

use std::path::PathBuf;

use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::orchestrator::{Orchestrator, OrchestratorState};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The set command implementation.
pub struct SetCommand {
    config: Option<PathBuf>,
    args: SetArgs,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(config: Option<PathBuf>, args: SetArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SetArgs {
        &self.args
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = std::path::absolute(&self.args.path)?;

        let store = open_store(self.config.as_deref())?;
        let mut orchestrator = Orchestrator::new(store);
        if self.args.yes && !orchestrator.consent_granted() {
            orchestrator.grant_consent()?;
        }

        if orchestrator.start(ui)? != OrchestratorState::Active {
            return Ok(CommandResult::failure(1));
        }

        if orchestrator.dispatch(&path, ui) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
