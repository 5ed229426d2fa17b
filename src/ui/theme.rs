//! Visual theme and styling.

use console::Style;

/// getthis's visual theme.
#[derive(Debug, Clone)]
pub struct GetThisTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for GetThisTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GetThisTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("  {}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = GetThisTheme::plain();
        let msg = theme.format_success("THIS updated");
        assert!(msg.contains("✓"));
        assert!(msg.contains("THIS updated"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = GetThisTheme::plain();
        let msg = theme.format_warning("No active editor found.");
        assert!(msg.contains("⚠"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = GetThisTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_hint() {
        let theme = GetThisTheme::plain();
        assert_eq!(theme.format_hint("Set SHELL"), "  Set SHELL");
    }
}
