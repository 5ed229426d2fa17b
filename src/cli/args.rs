//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// getthis - Keep $THIS pointing at the file you are editing.
#[derive(Debug, Parser)]
#[command(name = "getthis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file (overrides the default location)
    #[arg(short, long, global = true, env = "GETTHIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Follow the editor's active file (JSON lines on stdin) and keep THIS up to date
    Watch(WatchArgs),

    /// Set THIS to a file once
    Set(SetArgs),

    /// Show or change permission to edit your shell startup file
    Consent(ConsentArgs),

    /// Show where THIS is written and its current value (default)
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Minimum milliseconds between two updates
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Allow editing the shell startup file without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// File to point THIS at (relative paths are resolved against the current directory)
    pub path: PathBuf,

    /// Allow editing the shell startup file without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `consent` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConsentArgs {
    /// Allow editing the shell startup file
    #[arg(long, conflicts_with = "revoke")]
    pub grant: bool,

    /// Withdraw permission; you will be asked again next time
    #[arg(long)]
    pub revoke: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_watch_flags() {
        let cli = Cli::parse_from(["getthis", "watch", "--poll-interval", "50", "--yes"]);
        match cli.command {
            Some(Commands::Watch(args)) => {
                assert_eq!(args.poll_interval, Some(50));
                assert!(args.yes);
            }
            other => panic!("Expected Watch, got {:?}", other),
        }
    }

    #[test]
    fn parses_set_path() {
        let cli = Cli::parse_from(["getthis", "set", "/home/u/x.py"]);
        match cli.command {
            Some(Commands::Set(args)) => assert_eq!(args.path, PathBuf::from("/home/u/x.py")),
            other => panic!("Expected Set, got {:?}", other),
        }
    }

    #[test]
    fn consent_grant_conflicts_with_revoke() {
        let result = Cli::try_parse_from(["getthis", "consent", "--grant", "--revoke"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::parse_from(["getthis", "status", "--config", "/tmp/s.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.json")));
    }
}
