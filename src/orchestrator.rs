//! Wires the tracker to the writers.
//!
//! The orchestrator asks for consent before the first dotfile edit on POSIX
//! platforms, then routes every active file path to the integrated terminal
//! environment map and to the platform's persistent writer.
//!
//! ```text
//! POSIX:    Uninitialized -> AwaitingConsent -> Active
//!                                           \-> Declined
//! Windows:  Uninitialized -> Active
//! ```
//!
//! Writes run to completion before the next change is taken from the host,
//! so the last handled switch is always the last value written.

use std::path::{Path, PathBuf};

use crate::config::{ConfigStore, Settings, CONSENT_KEY};
use crate::error::{GetThisError, Result};
use crate::host::{terminal_env, HostEventSource};
use crate::shell::{detect, dotfile, home_dir, Platform, SessionWriter, ShellDialect};
use crate::tracker::ActiveFileTracker;
use crate::ui::{Prompt, UserInterface};

/// Prompt key for dotfile consent.
///
/// Non-interactive runs can answer it with `GETTHIS_PROMPT_DOTFILE_CONSENT`.
pub const CONSENT_PROMPT_KEY: &str = "dotfile_consent";

/// Lifecycle of an [`Orchestrator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    /// [`Orchestrator::start`] has not run yet.
    Uninitialized,
    /// Waiting for the user to allow dotfile edits.
    AwaitingConsent,
    /// Paths are being propagated.
    Active,
    /// The user refused; nothing is propagated this session.
    Declined,
}

/// Where a path ends up for the current platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Shell startup file.
    Dotfile { path: PathBuf, dialect: ShellDialect },
    /// Windows user environment.
    Session,
}

/// Routes active file paths to the platform's writers.
pub struct Orchestrator<S: ConfigStore> {
    store: S,
    os: String,
    home: Option<PathBuf>,
    dialect: ShellDialect,
    session: SessionWriter,
    state: OrchestratorState,
}

impl<S: ConfigStore> Orchestrator<S> {
    /// Create an orchestrator for this machine.
    ///
    /// Uses the running OS, the user's home directory and `SHELL`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            os: std::env::consts::OS.to_string(),
            home: home_dir().ok(),
            dialect: ShellDialect::detect(),
            session: SessionWriter::new(),
            state: OrchestratorState::Uninitialized,
        }
    }

    /// Override the OS identifier.
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Override the home directory holding the dotfiles.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Override the shell dialect.
    pub fn with_dialect(mut self, dialect: ShellDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Override the Windows session writer.
    pub fn with_session_writer(mut self, session: SessionWriter) -> Self {
        self.session = session;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    /// The configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the orchestrator, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The configured shell dialect.
    pub fn dialect(&self) -> &ShellDialect {
        &self.dialect
    }

    /// Whether the user has allowed dotfile edits.
    pub fn consent_granted(&self) -> bool {
        Settings::load(&self.store).dotfile_consent
    }

    /// Record consent to dotfile edits.
    pub fn grant_consent(&mut self) -> Result<()> {
        self.store.set(CONSENT_KEY, serde_json::Value::Bool(true))?;
        tracing::info!("Dotfile consent recorded");
        Ok(())
    }

    /// Forget recorded consent; the next start asks again.
    pub fn revoke_consent(&mut self) -> Result<()> {
        self.store.remove(CONSENT_KEY)?;
        if self.state == OrchestratorState::Active {
            self.state = OrchestratorState::Uninitialized;
        }
        tracing::info!("Dotfile consent revoked");
        Ok(())
    }

    /// Resolve where paths are written on this platform.
    pub fn target(&self) -> Result<Target> {
        match detect(&self.os)? {
            Platform::Windows => Ok(Target::Session),
            Platform::MacOs | Platform::Linux => {
                let home = self.home.as_ref().ok_or_else(|| {
                    GetThisError::ConfigValidationError {
                        message: "Could not determine the home directory".to_string(),
                    }
                })?;
                Ok(Target::Dotfile {
                    path: self.dialect.dotfile(home)?,
                    dialect: self.dialect.clone(),
                })
            }
        }
    }

    /// Move out of `Uninitialized`, asking for consent when required.
    ///
    /// Refusal persists nothing, so the question comes back on the next
    /// start.
    pub fn start(&mut self, ui: &mut dyn UserInterface) -> Result<OrchestratorState> {
        if self.state != OrchestratorState::Uninitialized {
            return Ok(self.state);
        }

        let platform = match detect(&self.os) {
            Ok(platform) => platform,
            Err(e) => {
                // Every change will report the same error; keep watching anyway.
                ui.report(&e);
                self.state = OrchestratorState::Active;
                return Ok(self.state);
            }
        };

        if !platform.requires_consent() || self.consent_granted() {
            tracing::debug!("Starting on {} without consent prompt", platform);
            self.state = OrchestratorState::Active;
            return Ok(self.state);
        }

        self.state = OrchestratorState::AwaitingConsent;
        let location = match self.target() {
            Ok(Target::Dotfile { path, .. }) => path.display().to_string(),
            _ => "your shell startup file".to_string(),
        };
        let prompt = Prompt::new(
            CONSENT_PROMPT_KEY,
            format!(
                "getthis keeps `THIS` pointing at the active file by editing {}. Allow it?",
                location
            ),
            false,
        );

        let allowed = match ui.confirm(&prompt) {
            Ok(allowed) => allowed,
            Err(e) => {
                self.state = OrchestratorState::Declined;
                return Err(e);
            }
        };

        if allowed {
            self.grant_consent()?;
            self.state = OrchestratorState::Active;
        } else {
            ui.warning("THIS will not be updated. You will be asked again next time.");
            if !ui.is_interactive() {
                ui.show_hint(
                    "Set GETTHIS_PROMPT_DOTFILE_CONSENT=yes or run `getthis consent --grant`.",
                );
            }
            self.state = OrchestratorState::Declined;
        }

        Ok(self.state)
    }

    /// Propagate `path` to every writer for the current platform.
    ///
    /// An unsupported platform or shell fails before anything is written.
    /// On POSIX the consent flag is read again first; when it is gone the
    /// orchestrator drops back to `Uninitialized` without writing.
    pub fn handle(&mut self, path: &Path) -> Result<Platform> {
        if self.state != OrchestratorState::Active {
            return Err(GetThisError::ConfigValidationError {
                message: format!("Tracking is not active ({:?})", self.state),
            });
        }
        if !path.is_absolute() {
            return Err(GetThisError::ConfigValidationError {
                message: format!("{} is not an absolute path", path.display()),
            });
        }

        let platform = detect(&self.os)?;
        let target = self.target()?;
        if let Target::Dotfile { path: dotfile, .. } = &target {
            if !self.consent_granted() {
                tracing::info!("Dotfile consent withdrawn");
                self.state = OrchestratorState::Uninitialized;
                return Err(GetThisError::ConsentRequired {
                    path: dotfile.clone(),
                });
            }
        }
        let value = path.to_string_lossy();

        terminal_env::write(&mut self.store, platform, &value)?;

        match target {
            Target::Session => self.session.write(&value)?,
            Target::Dotfile { path, dialect } => dotfile::write(&path, &dialect, &value)?,
        }

        Ok(platform)
    }

    /// [`Orchestrator::handle`] with every failure reported to the user.
    ///
    /// Returns whether the path was propagated.
    pub fn dispatch(&mut self, path: &Path, ui: &mut dyn UserInterface) -> bool {
        match self.handle(path) {
            Ok(_) => {
                ui.success(&format!("THIS={}", path.display()));
                true
            }
            Err(e) => {
                tracing::debug!("Propagating {} failed: {:?}", path.display(), e);
                ui.report(&e);
                false
            }
        }
    }

    /// Propagate the active file until the host shuts down.
    ///
    /// Starts the orchestrator if needed; returns immediately when consent is
    /// refused, and stops once it is withdrawn.
    pub fn run(
        &mut self,
        tracker: &mut ActiveFileTracker,
        host: &dyn HostEventSource,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if self.start(ui)? != OrchestratorState::Active {
            return Ok(());
        }

        let subscription = host.subscribe();

        match tracker.refresh(host) {
            Ok(path) => {
                self.dispatch(&path, ui);
            }
            Err(e) if host.has_reported() => ui.report(&e),
            Err(e) => tracing::debug!("Host has not reported a document yet: {}", e),
        }

        if self.state != OrchestratorState::Active {
            return Ok(());
        }

        for change in tracker.changes(subscription) {
            match change {
                Ok(path) => {
                    self.dispatch(&path, ui);
                }
                Err(e) => ui.report(&e),
            }
            if self.state != OrchestratorState::Active {
                tracing::debug!("No longer active ({:?}), stopping", self.state);
                return Ok(());
            }
        }

        tracing::debug!("Host closed, stopping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JsonFileStore, MemoryStore};
    use crate::host::{ActiveDocument, ChannelHost, StdioHost};
    use std::io::Cursor;
    use crate::ui::MockUI;
    use serde_json::json;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn linux(temp: &TempDir, store: MemoryStore) -> Orchestrator<MemoryStore> {
        Orchestrator::new(store)
            .with_os("linux")
            .with_home(temp.path())
            .with_dialect(ShellDialect::Bash)
    }

    fn consented() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(CONSENT_KEY, json!(true)).unwrap();
        store
    }

    fn bashrc(temp: &TempDir, content: &str) -> PathBuf {
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, content).unwrap();
        rc
    }

    #[test]
    fn windows_starts_without_prompt() {
        let mut orch = Orchestrator::new(MemoryStore::new()).with_os("windows");
        let mut ui = MockUI::new();

        assert_eq!(orch.start(&mut ui).unwrap(), OrchestratorState::Active);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn posix_consent_is_asked_and_persisted() {
        let temp = TempDir::new().unwrap();
        let mut orch = linux(&temp, MemoryStore::new());
        let mut ui = MockUI::new();
        ui.set_answer(CONSENT_PROMPT_KEY, true);

        assert_eq!(orch.start(&mut ui).unwrap(), OrchestratorState::Active);
        assert_eq!(ui.prompts_shown(), [CONSENT_PROMPT_KEY.to_string()]);
        assert_eq!(orch.store().get(CONSENT_KEY), Some(json!(true)));
    }

    #[test]
    fn posix_refusal_persists_nothing_and_asks_again() {
        let temp = TempDir::new().unwrap();
        let mut orch = linux(&temp, MemoryStore::new());
        let mut ui = MockUI::new();
        ui.set_answer(CONSENT_PROMPT_KEY, false);

        assert_eq!(orch.start(&mut ui).unwrap(), OrchestratorState::Declined);
        assert!(orch.store().is_empty());
        assert!(ui.has_warning("asked again"));

        let mut next = linux(&temp, orch.into_store());
        let mut ui = MockUI::new();
        next.start(&mut ui).unwrap();
        assert_eq!(ui.prompts_shown().len(), 1);
    }

    #[test]
    fn recorded_consent_skips_prompt() {
        let temp = TempDir::new().unwrap();
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();

        assert_eq!(orch.start(&mut ui).unwrap(), OrchestratorState::Active);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn revoke_consent_returns_to_uninitialized() {
        let temp = TempDir::new().unwrap();
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();
        orch.start(&mut ui).unwrap();

        orch.revoke_consent().unwrap();
        assert_eq!(orch.state(), OrchestratorState::Uninitialized);
        assert!(!orch.consent_granted());
    }

    #[test]
    fn handle_writes_dotfile_and_terminal_env() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "export FOO=bar\n");
        let mut orch = linux(&temp, consented());
        orch.start(&mut MockUI::new()).unwrap();

        assert_eq!(orch.handle(Path::new("/home/u/x.py")).unwrap(), Platform::Linux);
        assert_eq!(
            fs::read_to_string(&rc).unwrap(),
            "export FOO=bar\nexport THIS=/home/u/x.py;\n"
        );
        assert_eq!(
            terminal_env::read(orch.store(), Platform::Linux).as_deref(),
            Some("/home/u/x.py")
        );
    }

    #[test]
    fn handle_before_start_is_rejected() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "");
        let mut orch = linux(&temp, consented());

        assert!(orch.handle(Path::new("/x")).is_err());
        assert_eq!(fs::read_to_string(rc).unwrap(), "");
    }

    #[test]
    fn relative_paths_are_rejected() {
        let temp = TempDir::new().unwrap();
        bashrc(&temp, "");
        let mut orch = linux(&temp, consented());
        orch.start(&mut MockUI::new()).unwrap();

        let err = orch.handle(Path::new("x.py")).unwrap_err();
        assert!(err.to_string().contains("not an absolute path"));
    }

    #[test]
    fn unsupported_platform_leaves_state_untouched() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "export FOO=bar\n");
        let mut orch = linux(&temp, consented()).with_os("plan9");
        let mut ui = MockUI::new();

        assert_eq!(orch.start(&mut ui).unwrap(), OrchestratorState::Active);
        assert!(ui.has_error("plan9"));

        let err = orch.handle(Path::new("/home/u/x.py")).unwrap_err();
        assert!(matches!(err, GetThisError::UnsupportedPlatform { .. }));
        assert_eq!(fs::read_to_string(&rc).unwrap(), "export FOO=bar\n");
        assert_eq!(orch.store().len(), 1);
    }

    #[test]
    fn unsupported_shell_leaves_state_untouched() {
        let temp = TempDir::new().unwrap();
        let mut orch =
            linux(&temp, consented()).with_dialect(ShellDialect::Unsupported("tcsh".into()));
        let mut ui = MockUI::new();
        orch.start(&mut ui).unwrap();

        assert!(!orch.dispatch(Path::new("/home/u/x.py"), &mut ui));
        assert!(ui.has_error("tcsh"));
        assert!(ui.has_hint("bash, zsh and fish"));
        assert!(terminal_env::read(orch.store(), Platform::Linux).is_none());
    }

    #[test]
    fn dispatch_reports_io_errors_and_recovers() {
        let temp = TempDir::new().unwrap();
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();
        orch.start(&mut ui).unwrap();

        assert!(!orch.dispatch(Path::new("/home/u/x.py"), &mut ui));
        assert!(ui.has_error(".bashrc"));

        let rc = bashrc(&temp, "");
        assert!(orch.dispatch(Path::new("/home/u/y.py"), &mut ui));
        assert_eq!(fs::read_to_string(rc).unwrap(), "export THIS=/home/u/y.py;\n");
        assert!(ui.has_success("THIS=/home/u/y.py"));
    }

    #[cfg(unix)]
    #[test]
    fn windows_uses_session_writer() {
        let mut orch = Orchestrator::new(MemoryStore::new())
            .with_os("win32")
            .with_session_writer(SessionWriter::with_program("true"));
        let mut ui = MockUI::new();
        orch.start(&mut ui).unwrap();

        assert!(orch.dispatch(Path::new("/work/a.txt"), &mut ui));
        assert_eq!(
            terminal_env::read(orch.store(), Platform::Windows).as_deref(),
            Some("/work/a.txt")
        );
    }

    #[cfg(unix)]
    #[test]
    fn windows_session_failure_is_reported() {
        let mut orch = Orchestrator::new(MemoryStore::new())
            .with_os("windows")
            .with_session_writer(SessionWriter::with_program("false"));
        let mut ui = MockUI::new();
        orch.start(&mut ui).unwrap();

        assert!(!orch.dispatch(Path::new("/work/a.txt"), &mut ui));
        assert!(ui.has_error("exit code 1"));
    }

    #[test]
    fn run_propagates_only_the_last_switch() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "export FOO=bar\n");
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();

        let host = ChannelHost::new();
        let feeder = host.clone();
        let handle = std::thread::spawn(move || {
            while feeder.subscriber_count() == 0 {
                std::thread::sleep(Duration::from_millis(1));
            }
            for name in ["a.py", "b.py", "c.py", "d.py"] {
                feeder.focus(ActiveDocument::saved(format!("/home/u/{}", name)));
                std::thread::sleep(Duration::from_millis(10));
            }
            feeder.focus(ActiveDocument::untitled());
            feeder.close();
        });

        let mut tracker = ActiveFileTracker::new(Duration::from_millis(1));
        orch.run(&mut tracker, &host, &mut ui).unwrap();
        handle.join().unwrap();

        let content = fs::read_to_string(&rc).unwrap();
        assert_eq!(content, "export FOO=bar\nexport THIS=/home/u/d.py;\n");
        assert_eq!(
            terminal_env::read(orch.store(), Platform::Linux).as_deref(),
            Some("/home/u/d.py")
        );
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn run_warns_when_nothing_is_focused_at_start() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "");
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();

        let host = ChannelHost::new();
        host.focus(ActiveDocument::untitled());
        host.close();

        let mut tracker = ActiveFileTracker::new(Duration::ZERO);
        orch.run(&mut tracker, &host, &mut ui).unwrap();

        assert!(ui.has_warning("No active editor found."));
        assert_eq!(fs::read_to_string(rc).unwrap(), "");
    }

    #[test]
    fn run_stops_when_consent_is_refused() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "");
        let mut orch = linux(&temp, MemoryStore::new());
        let mut ui = MockUI::new();
        ui.set_answer(CONSENT_PROMPT_KEY, false);

        let host = ChannelHost::new();
        host.focus(ActiveDocument::saved("/home/u/x.py"));

        let mut tracker = ActiveFileTracker::new(Duration::ZERO);
        orch.run(&mut tracker, &host, &mut ui).unwrap();

        assert_eq!(orch.state(), OrchestratorState::Declined);
        assert_eq!(host.subscriber_count(), 0);
        assert_eq!(fs::read_to_string(rc).unwrap(), "");
    }

    #[test]
    fn handle_rereads_consent_before_editing_dotfile() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "export FOO=bar\n");
        let settings = temp.path().join("settings.json");

        let mut store = JsonFileStore::open(&settings).unwrap();
        store.set(CONSENT_KEY, json!(true)).unwrap();
        let mut orch = Orchestrator::new(store)
            .with_os("linux")
            .with_home(temp.path())
            .with_dialect(ShellDialect::Bash);
        orch.start(&mut MockUI::new()).unwrap();
        orch.handle(Path::new("/home/u/x.py")).unwrap();

        let mut other = JsonFileStore::open(&settings).unwrap();
        other.set("editor.fontSize", json!(18)).unwrap();
        other.remove(CONSENT_KEY).unwrap();

        let err = orch.handle(Path::new("/home/u/y.py")).unwrap_err();
        assert!(matches!(err, GetThisError::ConsentRequired { ref path } if path == &rc));
        assert_eq!(orch.state(), OrchestratorState::Uninitialized);
        assert_eq!(
            fs::read_to_string(&rc).unwrap(),
            "export FOO=bar\nexport THIS=/home/u/x.py;\n"
        );

        let reloaded = JsonFileStore::open(&settings).unwrap();
        assert_eq!(reloaded.get("editor.fontSize"), Some(json!(18)));
        assert!(reloaded.get(CONSENT_KEY).is_none());
        assert_eq!(
            terminal_env::read(&reloaded, Platform::Linux).as_deref(),
            Some("/home/u/x.py")
        );
    }

    #[test]
    fn run_stops_when_consent_is_withdrawn() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "");
        let settings = temp.path().join("settings.json");

        let mut store = JsonFileStore::open(&settings).unwrap();
        store.set(CONSENT_KEY, json!(true)).unwrap();
        let mut orch = Orchestrator::new(store)
            .with_os("linux")
            .with_home(temp.path())
            .with_dialect(ShellDialect::Bash);
        let mut ui = MockUI::new();

        let host = ChannelHost::new();
        let feeder = host.clone();
        let rc_path = rc.clone();
        let handle = std::thread::spawn(move || {
            while feeder.subscriber_count() == 0 {
                std::thread::sleep(Duration::from_millis(1));
            }
            feeder.focus(ActiveDocument::saved("/home/u/a.py"));
            for _ in 0..500 {
                if fs::read_to_string(&rc_path).unwrap().contains("a.py") {
                    break;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
            JsonFileStore::open(&settings)
                .unwrap()
                .remove(CONSENT_KEY)
                .unwrap();
            feeder.focus(ActiveDocument::saved("/home/u/b.py"));
        });

        let mut tracker = ActiveFileTracker::new(Duration::from_millis(1));
        orch.run(&mut tracker, &host, &mut ui).unwrap();
        handle.join().unwrap();

        assert_eq!(orch.state(), OrchestratorState::Uninitialized);
        assert!(ui.has_error("no longer updated"));
        assert!(ui.has_hint("consent --grant"));
        assert_eq!(fs::read_to_string(rc).unwrap(), "export THIS=/home/u/a.py;\n");
    }

    #[test]
    fn non_interactive_refusal_explains_how_to_allow() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        linux(&temp, MemoryStore::new()).start(&mut ui).unwrap();
        assert!(ui.has_hint("GETTHIS_PROMPT_DOTFILE_CONSENT"));

        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_answer(CONSENT_PROMPT_KEY, false);
        linux(&temp, MemoryStore::new()).start(&mut ui).unwrap();
        assert!(ui.has_warning("asked again"));
        assert!(ui.hints().is_empty());
    }

    #[test]
    fn run_warns_on_switch_to_untitled() {
        let temp = TempDir::new().unwrap();
        let rc = bashrc(&temp, "");
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();

        let host = ChannelHost::new();
        host.focus(ActiveDocument::saved("/home/u/x.py"));
        let feeder = host.clone();
        let handle = std::thread::spawn(move || {
            while feeder.subscriber_count() == 0 {
                std::thread::sleep(Duration::from_millis(1));
            }
            feeder.focus(ActiveDocument::untitled());
            feeder.close();
        });

        let mut tracker = ActiveFileTracker::new(Duration::ZERO);
        orch.run(&mut tracker, &host, &mut ui).unwrap();
        handle.join().unwrap();

        assert!(ui.has_success("THIS=/home/u/x.py"));
        assert!(ui.has_warning("No active editor found."));
        assert_eq!(fs::read_to_string(rc).unwrap(), "export THIS=/home/u/x.py;\n");
    }

    #[test]
    fn run_is_quiet_until_host_reports() {
        let temp = TempDir::new().unwrap();
        bashrc(&temp, "");
        let mut orch = linux(&temp, consented());
        let mut ui = MockUI::new();

        let host = StdioHost::new(Cursor::new(Vec::new()));
        let mut tracker = ActiveFileTracker::new(Duration::ZERO);
        orch.run(&mut tracker, &host, &mut ui).unwrap();

        assert!(ui.warnings().is_empty());
        assert!(ui.errors().is_empty());
        assert_eq!(orch.state(), OrchestratorState::Active);
    }
}
