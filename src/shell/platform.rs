//! Platform detection.

use crate::error::{GetThisError, Result};

/// Platforms the active file path can be propagated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// User environment persisted with `setx`.
    Windows,
    /// Shell dotfile in the home directory.
    MacOs,
    /// Shell dotfile in the home directory.
    Linux,
}

impl Platform {
    /// Detect the platform this process runs on.
    pub fn current() -> Result<Self> {
        detect(std::env::consts::OS)
    }

    /// Configuration key holding the integrated terminal environment map.
    pub fn terminal_env_key(&self) -> &'static str {
        match self {
            Platform::Windows => "terminal.integrated.env.windows",
            Platform::MacOs => "terminal.integrated.env.osx",
            Platform::Linux => "terminal.integrated.env.linux",
        }
    }

    /// Whether writing the variable mutates files the user owns.
    ///
    /// POSIX platforms edit a shell dotfile and need recorded consent first.
    pub fn requires_consent(&self) -> bool {
        matches!(self, Platform::MacOs | Platform::Linux)
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an OS identifier to a [`Platform`].
///
/// Accepts both Rust's `std::env::consts::OS` names and the `win32`/`darwin`
/// spellings editors report.
///
/// # Example
///
/// ```
/// use getthis::shell::{detect, Platform};
///
/// assert_eq!(detect("darwin").unwrap(), Platform::MacOs);
/// assert!(detect("plan9").is_err());
/// ```
pub fn detect(os: &str) -> Result<Platform> {
    match os.trim().to_lowercase().as_str() {
        "windows" | "win32" => Ok(Platform::Windows),
        "macos" | "darwin" => Ok(Platform::MacOs),
        "linux" => Ok(Platform::Linux),
        _ => Err(GetThisError::UnsupportedPlatform {
            platform: os.to_string(),
        }),
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
