//! Active file tracking.
//!
//! The tracker owns the last known active file path and turns host
//! notifications into a lazy sequence of paths.
//!
//! # Poll interval
//!
//! After a path is emitted the tracker waits out a fixed interval (200 ms by
//! default) before taking the next notification. Everything that arrives in
//! the meantime collapses into the latest qualifying document, so a burst of
//! tab switches costs one write instead of one per switch. The price is that
//! the propagated value may lag the editor by up to one interval.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::DEFAULT_POLL_INTERVAL;
use crate::error::{GetThisError, Result};
use crate::host::{HostEventSource, Subscription};

/// Last known active file path.
///
/// Replaced on every qualifying change, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFileState {
    current: Option<PathBuf>,
}

impl ActiveFileState {
    /// The most recent path, if any change has been seen.
    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

/// Follows the host's active document.
#[derive(Debug)]
pub struct ActiveFileTracker {
    state: ActiveFileState,
    poll_interval: Duration,
    last_emit: Option<Instant>,
}

impl Default for ActiveFileTracker {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl ActiveFileTracker {
    /// Create a tracker that waits `poll_interval` between emitted paths.
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            state: ActiveFileState::default(),
            poll_interval,
            last_emit: None,
        }
    }

    /// The tracked state.
    pub fn state(&self) -> &ActiveFileState {
        &self.state
    }

    /// The most recent path.
    pub fn current(&self) -> Option<&Path> {
        self.state.current()
    }

    /// The configured poll interval.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Query the host's active document once.
    ///
    /// Returns [`GetThisError::NoActiveDocument`] when nothing qualifies; the
    /// previous path is kept in that case.
    pub fn refresh(&mut self, host: &dyn HostEventSource) -> Result<PathBuf> {
        let doc = host.active_document();
        let path = doc
            .as_ref()
            .and_then(|d| d.file_path())
            .map(Path::to_path_buf)
            .ok_or(GetThisError::NoActiveDocument)?;

        self.record(path.clone());
        Ok(path)
    }

    /// Paths of qualifying active-document changes, as they happen.
    ///
    /// Changes to untitled buffers or panels yield
    /// [`GetThisError::NoActiveDocument`] and leave the state alone. The
    /// sequence ends when the host closes the subscription. Calling this
    /// again with a fresh subscription resumes tracking with the same state.
    pub fn changes(&mut self, subscription: Subscription) -> ActiveFileChanges<'_> {
        ActiveFileChanges {
            tracker: self,
            subscription,
        }
    }

    fn record(&mut self, path: PathBuf) {
        self.state.current = Some(path);
        self.last_emit = Some(Instant::now());
    }

    fn wait_poll_interval(&self) {
        if let Some(last) = self.last_emit {
            let elapsed = last.elapsed();
            if elapsed < self.poll_interval {
                thread::sleep(self.poll_interval - elapsed);
            }
        }
    }
}

/// Iterator returned by [`ActiveFileTracker::changes`].
pub struct ActiveFileChanges<'a> {
    tracker: &'a mut ActiveFileTracker,
    subscription: Subscription,
}

impl Iterator for ActiveFileChanges<'_> {
    type Item = Result<PathBuf>;

    /// The next change, or [`GetThisError::NoActiveDocument`] for a burst in
    /// which no document qualified.
    fn next(&mut self) -> Option<Result<PathBuf>> {
        self.tracker.wait_poll_interval();

        let first = self.subscription.recv()?;
        let mut latest = first.file_path().map(Path::to_path_buf);

        // Only the newest qualifying document of a burst matters.
        while let Some(doc) = self.subscription.try_recv() {
            if let Some(path) = doc.file_path() {
                latest = Some(path.to_path_buf());
            }
        }

        match latest {
            Some(path) => {
                tracing::debug!("Active file: {}", path.display());
                self.tracker.record(path.clone());
                Some(Ok(path))
            }
            None => {
                tracing::debug!("Change without a saved editor document");
                Some(Err(GetThisError::NoActiveDocument))
            }
        }
    }
}
