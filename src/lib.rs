//! getthis - Keep `$THIS` pointing at the file you are editing.
//!
//! getthis follows the active document of an editor host and writes its
//! absolute path into the `THIS` environment variable: into the editor's
//! integrated-terminal environment, and into the shell startup file on
//! macOS and Linux (after the user agrees) or the user environment on
//! Windows.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings store and typed settings
//! - [`error`] - Error types and result aliases
//! - [`host`] - Editor host adapters and active-document events
//! - [`orchestrator`] - Consent flow and platform dispatch
//! - [`shell`] - Platform detection, shell dialects and writers
//! - [`tracker`] - Active-file tracking
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use getthis::shell::{dotfile, ShellDialect};
//!
//! let rc = "alias ll='ls -l'\nexport THIS=/old/file.txt;\n";
//! let updated = dotfile::apply(rc, &ShellDialect::Bash, "/home/u/proj/main.rs").unwrap();
//! assert_eq!(updated, "alias ll='ls -l'\nexport THIS=/home/u/proj/main.rs;\n");
//! ```
//!
//! For the full pipeline, see the integration tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod orchestrator;
pub mod shell;
pub mod tracker;
pub mod ui;

pub use error::{GetThisError, Result};
