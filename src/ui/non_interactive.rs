//! Non-interactive UI for CI, pipes and editor-spawned processes.

use std::collections::HashMap;

use crate::error::Result;

use super::{parse_answer, OutputMode, Prompt, UserInterface};

/// Prefix of environment variables answering prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "GETTHIS_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `GETTHIS_PROMPT_<KEY>` environment variables,
/// falling back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            eprintln!("  {}", hint);
        }
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            match parse_answer(value) {
                Some(answer) => return Ok(answer),
                None => tracing::warn!("Ignoring unrecognized {}={}", env_key, value),
            }
        }

        tracing::debug!(
            "Answering '{}' with default {} (non-interactive)",
            prompt.key,
            prompt.default
        );
        Ok(prompt.default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
