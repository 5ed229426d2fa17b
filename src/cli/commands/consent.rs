//! Consent command implementation.
//!
//! The `getthis consent` command shows, grants or revokes permission to edit
//! the shell startup file.

use std::path::PathBuf;

use crate::cli::args::ConsentArgs;
use crate::config::JsonFileStore;
use crate::error::Result;
use crate::orchestrator::{Orchestrator, Target};
use crate::ui::UserInterface;

use super::dispatcher::{open_store, Command, CommandResult};

/// The consent command implementation.
pub struct ConsentCommand {
    config: Option<PathBuf>,
    args: ConsentArgs,
}

impl ConsentCommand {
    /// Create a new consent command.
    pub fn new(config: Option<PathBuf>, args: ConsentArgs) -> Self {
        Self { config, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConsentArgs {
        &self.args
    }

    fn describe_target(orchestrator: &Orchestrator<JsonFileStore>) -> String {
        match orchestrator.target() {
            Ok(Target::Dotfile { path, .. }) => path.display().to_string(),
            Ok(Target::Session) => "the user environment".to_string(),
            Err(_) => "your shell startup file".to_string(),
        }
    }
}

impl Command for ConsentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(self.config.as_deref())?;
        let mut orchestrator = Orchestrator::new(store);
        let target = Self::describe_target(&orchestrator);

        if self.args.grant {
            orchestrator.grant_consent()?;
            ui.success(&format!("getthis may now edit {}", target));
        } else if self.args.revoke {
            orchestrator.revoke_consent()?;
            ui.success(&format!(
                "getthis will ask before editing {} again",
                target
            ));
        } else if orchestrator.consent_granted() {
            ui.message(&format!("Allowed to edit {}", target));
        } else {
            ui.message(&format!("Not allowed to edit {} yet", target));
            ui.show_hint("Run `getthis consent --grant` or answer the prompt on the next watch.");
        }

        Ok(CommandResult::success())
    }
}
