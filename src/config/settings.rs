//! Typed view over the getthis keys in the configuration store.

use serde_json::Value;
use std::time::Duration;

use super::ConfigStore;

/// Store key recording the user's consent to dotfile edits.
pub const CONSENT_KEY: &str = "getthis.dotfileConsent";

/// Store key for the tracker's poll interval in milliseconds.
pub const POLL_INTERVAL_KEY: &str = "getthis.pollIntervalMs";

/// Default delay between handling a change and waiting for the next one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// getthis settings read from the configuration store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether the user allowed editing their shell startup file.
    pub dotfile_consent: bool,

    /// Minimum time between two handled changes.
    pub poll_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dotfile_consent: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl Settings {
    /// Read settings from `store`, using defaults for missing or mistyped keys.
    pub fn load(store: &dyn ConfigStore) -> Self {
        let dotfile_consent = store
            .get(CONSENT_KEY)
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let poll_interval = match store.get(POLL_INTERVAL_KEY) {
            Some(Value::Number(n)) => n
                .as_u64()
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_POLL_INTERVAL),
            Some(other) => {
                tracing::warn!("Ignoring non-numeric {}: {}", POLL_INTERVAL_KEY, other);
                DEFAULT_POLL_INTERVAL
            }
            None => DEFAULT_POLL_INTERVAL,
        };

        Self {
            dotfile_consent,
            poll_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use serde_json::json;

    #[test]
    fn defaults_for_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn reads_consent_and_interval() {
        let mut store = MemoryStore::new();
        store.set(CONSENT_KEY, json!(true)).unwrap();
        store.set(POLL_INTERVAL_KEY, json!(50)).unwrap();

        let settings = Settings::load(&store);
        assert!(settings.dotfile_consent);
        assert_eq!(settings.poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn mistyped_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(CONSENT_KEY, json!("yes")).unwrap();
        store.set(POLL_INTERVAL_KEY, json!("fast")).unwrap();

        let settings = Settings::load(&store);
        assert!(!settings.dotfile_consent);
        assert_eq!(settings.poll_interval, DEFAULT_POLL_INTERVAL);
    }
}
