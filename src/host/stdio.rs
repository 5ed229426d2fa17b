//! JSON-lines host on a reader.
//!
//! Editors integrate by spawning `getthis watch` and writing one JSON
//! object per focus change:
//!
//! ```text
//! {"path": "/home/u/project/main.rs", "untitled": false, "viewColumn": 1}
//! {"path": null, "untitled": true, "viewColumn": 1}
//! ```
//!
//! The stream ending means the editor went away.

use std::io::{BufRead, BufReader};
use std::sync::Mutex;
use std::thread;

use super::{ActiveDocument, ChannelHost, HostEventSource, Subscription};
use crate::error::{GetThisError, Result};

type BoxedReader = Box<dyn BufRead + Send>;

/// Host that reads focus changes from a line-oriented stream.
pub struct StdioHost {
    host: ChannelHost,
    reader: Mutex<Option<BoxedReader>>,
}

impl StdioHost {
    /// Read events from `reader`.
    ///
    /// Nothing is read until the first [`HostEventSource::subscribe`].
    pub fn new(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            host: ChannelHost::new(),
            reader: Mutex::new(Some(Box::new(reader))),
        }
    }

    /// Read events from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }

    fn start(&self) {
        let reader = self
            .reader
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if let Some(reader) = reader {
            let host = self.host.clone();
            thread::spawn(move || pump(reader, &host));
        }
    }
}

impl HostEventSource for StdioHost {
    fn active_document(&self) -> Option<ActiveDocument> {
        self.host.active_document()
    }

    fn subscribe(&self) -> Subscription {
        let subscription = self.host.subscribe();
        self.start();
        subscription
    }

    fn has_reported(&self) -> bool {
        self.host.has_reported()
    }
}

/// Forward every parsed line to `host`, closing it at end of stream.
fn pump(reader: BoxedReader, host: &ChannelHost) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("Stopped reading host events: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_event(&line) {
            Ok(doc) => {
                tracing::debug!("Host focus: {:?}", doc.path);
                host.focus(doc);
            }
            Err(e) => tracing::warn!("Skipping host event: {}", e),
        }
    }

    tracing::debug!("Host event stream ended");
    host.close();
}

/// Parse one JSON-lines event.
pub fn parse_event(line: &str) -> Result<ActiveDocument> {
    serde_json::from_str(line.trim()).map_err(|e| GetThisError::ConfigValidationError {
        message: format!("invalid host event {:?}: {}", line.trim(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn parses_saved_document() {
        let doc = parse_event(r#"{"path":"/a/b.py","untitled":false,"viewColumn":1}"#).unwrap();
        assert_eq!(doc, ActiveDocument::saved("/a/b.py"));
    }

    #[test]
    fn parses_missing_fields_as_defaults() {
        let doc = parse_event(r#"{"path":"/a/b.py"}"#).unwrap();
        assert_eq!(doc.path, Some(PathBuf::from("/a/b.py")));
        assert_eq!(doc.view_column, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_event("not json").is_err());
    }

    #[test]
    fn streams_events_then_ends() {
        let input = concat!(
            "{\"path\":\"/a.py\",\"viewColumn\":1}\n",
            "garbage\n",
            "\n",
            "{\"path\":\"/b.py\",\"viewColumn\":1}\n",
        );
        let host = StdioHost::new(Cursor::new(input.as_bytes().to_vec()));
        let sub = host.subscribe();

        assert_eq!(sub.recv(), Some(ActiveDocument::saved("/a.py")));
        assert_eq!(sub.recv(), Some(ActiveDocument::saved("/b.py")));
        assert_eq!(sub.recv(), None);
        assert_eq!(host.active_document(), Some(ActiveDocument::saved("/b.py")));
        assert!(host.has_reported());
    }

    #[test]
    fn empty_stream_never_reports() {
        let host = StdioHost::new(Cursor::new(Vec::new()));
        assert!(!host.has_reported());

        let sub = host.subscribe();
        assert_eq!(sub.recv(), None);
        assert!(!host.has_reported());
        assert!(host.active_document().is_none());
    }
}
