//! Shell dialect detection and startup file locations.

use std::path::{Path, PathBuf};

use crate::error::{GetThisError, Result};

/// Shell syntax used for the variable assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellDialect {
    Bash,
    Zsh,
    Fish,
    /// Any other shell, with the name it was detected from.
    Unsupported(String),
}

impl ShellDialect {
    /// Parse the dialect from a shell executable path or name.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellDialect::Bash,
            "zsh" => ShellDialect::Zsh,
            "fish" => ShellDialect::Fish,
            _ => ShellDialect::Unsupported(exe.to_string()),
        }
    }

    /// Detect the dialect from the `SHELL` environment variable.
    ///
    /// Falls back to bash when `SHELL` is unset or empty.
    pub fn detect() -> Self {
        match std::env::var("SHELL") {
            Ok(shell) if !shell.trim().is_empty() => Self::from_executable(shell.trim()),
            _ => ShellDialect::Bash,
        }
    }

    /// Startup file for this dialect below `home`.
    pub fn dotfile(&self, home: &Path) -> Result<PathBuf> {
        match self {
            ShellDialect::Bash => Ok(home.join(".bashrc")),
            ShellDialect::Zsh => Ok(home.join(".zshrc")),
            ShellDialect::Fish => Ok(home.join(".config").join("fish").join("config.fish")),
            ShellDialect::Unsupported(shell) => Err(GetThisError::UnsupportedShell {
                shell: shell.clone(),
            }),
        }
    }

    /// Short display name.
    pub fn name(&self) -> &str {
        match self {
            ShellDialect::Bash => "bash",
            ShellDialect::Zsh => "zsh",
            ShellDialect::Fish => "fish",
            ShellDialect::Unsupported(shell) => shell,
        }
    }
}

/// The current user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| GetThisError::ConfigValidationError {
        message: "Could not determine the home directory".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_executable() {
        assert_eq!(ShellDialect::from_executable("/bin/bash"), ShellDialect::Bash);
        assert_eq!(ShellDialect::from_executable("/usr/bin/zsh"), ShellDialect::Zsh);
        assert_eq!(
            ShellDialect::from_executable("/opt/homebrew/bin/fish"),
            ShellDialect::Fish
        );
        assert_eq!(
            ShellDialect::from_executable("/bin/tcsh"),
            ShellDialect::Unsupported("/bin/tcsh".to_string())
        );
    }

    #[test]
    fn dotfile_locations() {
        let home = PathBuf::from("/home/u");
        assert_eq!(
            ShellDialect::Bash.dotfile(&home).unwrap(),
            PathBuf::from("/home/u/.bashrc")
        );
        assert_eq!(
            ShellDialect::Zsh.dotfile(&home).unwrap(),
            PathBuf::from("/home/u/.zshrc")
        );
        assert!(ShellDialect::Fish
            .dotfile(&home)
            .unwrap()
            .ends_with(".config/fish/config.fish"));
    }

    #[test]
    fn unsupported_dialect_has_no_dotfile() {
        let err = ShellDialect::Unsupported("nu".into())
            .dotfile(Path::new("/home/u"))
            .unwrap_err();
        assert!(matches!(err, GetThisError::UnsupportedShell { .. }));
    }
}
