use std::collections::HashMap;

/// Storage key of the letter snapshot.
pub const LETTERS_KEY: &str = "ristikko2021";

/// A durable string key-value sink.
///
/// Writes are best effort: implementations log failures instead of reporting them,
/// and a failed write only means the next session starts from an older snapshot.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: String);
}

/// An in-memory store, used for tests and when no platform storage is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load(LETTERS_KEY), None);
        store.save(LETTERS_KEY, "{}".to_owned());
        assert_eq!(store.load(LETTERS_KEY).as_deref(), Some("{}"));
        store.save(LETTERS_KEY, r#"{"1":"A"}"#.to_owned());
        assert_eq!(store.load(LETTERS_KEY).as_deref(), Some(r#"{"1":"A"}"#));
    }
}
