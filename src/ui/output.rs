//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every update, including unchanged writes.
    Verbose,
    /// Show updates and status.
    #[default]
    Normal,
    /// Show warnings and errors only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows informational messages.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows warnings and hints.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
