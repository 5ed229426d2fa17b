//! Integrated terminal environment maps.
//!
//! Editors read `terminal.integrated.env.<platform>` from the user settings
//! and inject its entries into every terminal they open. Setting `THIS` there
//! makes the path available without touching any shell file.

use serde_json::{Map, Value};

use crate::config::ConfigStore;
use crate::error::Result;
use crate::shell::{Platform, VARIABLE_NAME};

/// Set `THIS` in the terminal environment map for `platform`.
///
/// Other entries in the map are kept.
pub fn write(store: &mut dyn ConfigStore, platform: Platform, value: &str) -> Result<()> {
    let key = platform.terminal_env_key();
    let mut env = match store.get(key) {
        Some(Value::Object(env)) => env,
        Some(other) => {
            tracing::warn!("Replacing non-object {}: {}", key, other);
            Map::new()
        }
        None => Map::new(),
    };

    if env.get(VARIABLE_NAME).and_then(Value::as_str) == Some(value) {
        return Ok(());
    }

    env.insert(VARIABLE_NAME.to_string(), Value::String(value.to_string()));
    store.set(key, Value::Object(env))?;
    tracing::debug!("Set {} {}", key, VARIABLE_NAME);
    Ok(())
}

/// Current `THIS` value in the terminal environment map for `platform`.
pub fn read(store: &dyn ConfigStore, platform: Platform) -> Option<String> {
    let env = store.get(platform.terminal_env_key())?;
    env.get(VARIABLE_NAME)?.as_str().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use serde_json::json;

    #[test]
    fn writes_into_platform_map() {
        let mut store = MemoryStore::new();
        write(&mut store, Platform::Linux, "/home/u/x.py").unwrap();

        assert_eq!(
            store.get("terminal.integrated.env.linux"),
            Some(json!({ "THIS": "/home/u/x.py" }))
        );
        assert_eq!(read(&store, Platform::Linux).as_deref(), Some("/home/u/x.py"));
        assert!(read(&store, Platform::MacOs).is_none());
    }

    #[test]
    fn keeps_other_entries() {
        let mut store = MemoryStore::new();
        store
            .set("terminal.integrated.env.osx", json!({ "FOO": "bar", "THIS": "/old" }))
            .unwrap();

        write(&mut store, Platform::MacOs, "/new").unwrap();

        assert_eq!(
            store.get("terminal.integrated.env.osx"),
            Some(json!({ "FOO": "bar", "THIS": "/new" }))
        );
    }

    #[test]
    fn replaces_non_object_value() {
        let mut store = MemoryStore::new();
        store.set("terminal.integrated.env.windows", json!("oops")).unwrap();

        write(&mut store, Platform::Windows, "C:\\a.txt").unwrap();

        assert_eq!(read(&store, Platform::Windows).as_deref(), Some("C:\\a.txt"));
    }
}
