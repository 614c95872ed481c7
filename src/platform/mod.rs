//! Platform abstraction layer
//!
//! Storage is the only platform difference that matters here: the deck
//! and settings live in LocalStorage on the web and in memory everywhere
//! else (native builds, tests).

use std::collections::BTreeMap;

/// Key-value storage, always available, synchronous, best-effort.
/// Values are UTF-8 strings: the web backend stores strings and every
/// persisted payload here is JSON text.
pub trait Storage {
    /// Returns the stored value, or None when the key is absent or the
    /// backend is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes the value. Failures (quota, unavailable backend) are
    /// swallowed; persistence is never fatal.
    fn set(&mut self, key: &str, value: &str);
}

/// Browser LocalStorage backend (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::backend() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory backend for native builds and tests. Counts writes so tests
/// can assert how often persistence was invoked.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    writes: u32,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls observed
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("cards"), None);

        storage.set("cards", "[]");
        assert_eq!(storage.get("cards").as_deref(), Some("[]"));
        assert_eq!(storage.writes(), 1);

        storage.set("cards", r#"[{"prompt":"Q","answer":"A"}]"#);
        assert_eq!(storage.writes(), 2);
        assert_eq!(
            storage.get("cards").as_deref(),
            Some(r#"[{"prompt":"Q","answer":"A"}]"#)
        );
    }
}
