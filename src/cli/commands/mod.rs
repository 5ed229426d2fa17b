//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command opens the settings
//! store itself, so `--config` applies uniformly.

pub mod completions;
pub mod consent;
pub mod dispatcher;
pub mod set;
pub mod status;
pub mod watch;

pub use dispatcher::{open_store, Command, CommandDispatcher, CommandResult};
