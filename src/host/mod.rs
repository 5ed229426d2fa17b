//! Interfaces to the editor hosting getthis.
//!
//! The host is anything that can say which document is focused and notify
//! when that changes. This module provides:
//! - [`HostEventSource`] trait the tracker reads from
//! - [`Subscription`] for receiving change notifications
//! - [`ChannelHost`] for in-process hosts and tests
//! - [`StdioHost`] for editors that stream JSON lines into `getthis watch`
//! - [`terminal_env`] for the integrated terminal environment maps

pub mod channel;
pub mod stdio;
pub mod terminal_env;

pub use channel::ChannelHost;
pub use stdio::{parse_event, StdioHost};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError};

/// The host's view of a document focused in an editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveDocument {
    /// Filesystem path, absent for buffers that were never saved.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Whether the document is a new, unsaved buffer.
    #[serde(default)]
    pub untitled: bool,

    /// Editor column showing the document.
    ///
    /// Panels such as output or terminal views have no column.
    #[serde(default)]
    pub view_column: Option<u32>,
}

impl ActiveDocument {
    /// A saved document shown in the first editor column.
    pub fn saved(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            untitled: false,
            view_column: Some(1),
        }
    }

    /// A new buffer with no backing file.
    pub fn untitled() -> Self {
        Self {
            path: None,
            untitled: true,
            view_column: Some(1),
        }
    }

    /// The path to propagate, if this document qualifies.
    ///
    /// Only saved documents shown in an editor column qualify.
    pub fn file_path(&self) -> Option<&Path> {
        if self.untitled || self.view_column.is_none() {
            return None;
        }
        self.path.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}

/// Source of active-document information and change notifications.
pub trait HostEventSource {
    /// The document focused right now, if any.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Start receiving a notification for every active-document change.
    fn subscribe(&self) -> Subscription;

    /// Whether the host has said anything about its active document yet.
    ///
    /// Hosts that learn about documents asynchronously start out `false`;
    /// an empty [`HostEventSource::active_document`] then means "not known
    /// yet" rather than "nothing focused".
    fn has_reported(&self) -> bool {
        true
    }
}

/// Receiving end of active-document change notifications.
///
/// Dropping the subscription cancels it; the host forgets it on its next
/// notification.
#[derive(Debug)]
pub struct Subscription {
    rx: Receiver<ActiveDocument>,
}

impl Subscription {
    /// Wrap a channel receiver.
    pub fn new(rx: Receiver<ActiveDocument>) -> Self {
        Self { rx }
    }

    /// Block until the next notification.
    ///
    /// Returns `None` once the host has shut down.
    pub fn recv(&self) -> Option<ActiveDocument> {
        self.rx.recv().ok()
    }

    /// Take an already queued notification without blocking.
    pub fn try_recv(&self) -> Option<ActiveDocument> {
        match self.rx.try_recv() {
            Ok(doc) => Some(doc),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Stop receiving notifications.
    pub fn cancel(self) {}
}
