use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::SessionStore;

/// In-memory session store for tests and processes without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }

    fn set_many(&self, pairs: &[(&str, &str)]) {
        if let Ok(mut entries) = self.entries.write() {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        }
    }

    fn remove_many(&self, keys: &[&str]) {
        if let Ok(mut entries) = self.entries.write() {
            for key in keys {
                entries.remove(*key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemorySessionStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.set("k", "w");
        assert_eq!(store.get("k").as_deref(), Some("w"));

        store.remove("k");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn test_batch_operations() {
        let store = MemorySessionStore::new();
        store.set_many(&[("a", "1"), ("b", "2")]);
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));

        store.remove_many(&["a", "b", "missing"]);
        assert!(store.get("a").is_none());
        assert!(store.get("b").is_none());
    }
}
