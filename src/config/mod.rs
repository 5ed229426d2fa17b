//! Configuration storage for getthis.
//!
//! - [`store`] - the [`ConfigStore`] trait and its JSON-file and in-memory
//!   implementations
//! - [`settings`] - typed access to the keys getthis owns
//!
//! # Example
//!
//! ```
//! use getthis::config::{ConfigStore, MemoryStore, Settings, CONSENT_KEY};
//! use serde_json::json;
//!
//! let mut store = MemoryStore::new();
//! store.set(CONSENT_KEY, json!(true)).unwrap();
//!
//! let settings = Settings::load(&store);
//! assert!(settings.dotfile_consent);
//! ```
//!
//! # Store location
//!
//! The CLI uses `$GETTHIS_CONFIG` when set, otherwise
//! `<config dir>/getthis/settings.json` (for example
//! `~/.config/getthis/settings.json` on Linux).

pub mod settings;
pub mod store;

pub use settings::{Settings, CONSENT_KEY, DEFAULT_POLL_INTERVAL, POLL_INTERVAL_KEY};
pub use store::{ConfigStore, JsonFileStore, MemoryStore, CONFIG_PATH_ENV};
