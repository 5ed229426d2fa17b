//! In-process host.

use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{ActiveDocument, HostEventSource, Subscription};

#[derive(Debug, Default)]
struct HostState {
    current: Option<ActiveDocument>,
    subscribers: Vec<Sender<ActiveDocument>>,
    reported: bool,
    closed: bool,
}

/// Host driven by direct calls.
///
/// Clones share state, so one clone can be handed to the tracker while
/// another reports focus changes.
///
/// # Example
///
/// ```
/// use getthis::host::{ActiveDocument, ChannelHost, HostEventSource};
///
/// let host = ChannelHost::new();
/// let subscription = host.subscribe();
///
/// host.focus(ActiveDocument::saved("/home/u/x.py"));
/// assert_eq!(subscription.recv(), Some(ActiveDocument::saved("/home/u/x.py")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChannelHost {
    state: Arc<Mutex<HostState>>,
}

impl ChannelHost {
    /// Create a host with no focused document.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make `doc` the active document and notify every subscriber.
    pub fn focus(&self, doc: ActiveDocument) {
        let mut state = self.lock();
        state.current = Some(doc.clone());
        state.reported = true;
        state.subscribers.retain(|tx| tx.send(doc.clone()).is_ok());
    }

    /// Report that no document is focused anymore.
    ///
    /// Subscribers are not notified; the tracker keeps its last path.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.current = None;
        state.reported = true;
    }

    /// Shut the host down, ending every subscription.
    ///
    /// Subscriptions made afterwards end immediately.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.subscribers.clear();
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

impl HostEventSource for ChannelHost {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.lock().current.clone()
    }

    fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let mut state = self.lock();
        if !state.closed {
            state.subscribers.push(tx);
        }
        Subscription::new(rx)
    }

    fn has_reported(&self) -> bool {
        self.lock().reported
    }
}
