//! Platform and shell detection, and the writers that persist `THIS`.

pub mod dialect;
pub mod dotfile;
pub mod platform;
pub mod session;

pub use dialect::{home_dir, ShellDialect};
pub use dotfile::VARIABLE_NAME;
pub use platform::{detect, is_ci, Platform};
pub use session::SessionWriter;
