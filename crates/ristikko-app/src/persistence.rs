//! Adapters between eframe storage and the session state.

use eframe::Storage;
use ristikko_game::KeyValueStore;

use crate::state::Settings;

const SETTINGS_KEY: &str = "ristikko-settings";

/// Key-value access to eframe storage.
///
/// Storage is optional: it is missing when persistence is unavailable on the platform,
/// and read-only while the app is being created. Writes that cannot be performed are
/// logged and dropped.
pub(crate) enum EframeStore<'a> {
    ReadOnly(&'a dyn Storage),
    Writable(&'a mut dyn Storage),
    Unavailable,
}

impl<'a> EframeStore<'a> {
    pub(crate) fn read_only(storage: Option<&'a dyn Storage>) -> Self {
        storage.map_or(Self::Unavailable, Self::ReadOnly)
    }

    pub(crate) fn writable(storage: Option<&'a mut (dyn Storage + 'static)>) -> Self {
        match storage {
            Some(storage) => Self::Writable(storage),
            None => Self::Unavailable,
        }
    }
}

impl KeyValueStore for EframeStore<'_> {
    fn load(&self, key: &str) -> Option<String> {
        match self {
            Self::ReadOnly(storage) => storage.get_string(key),
            Self::Writable(storage) => storage.get_string(key),
            Self::Unavailable => None,
        }
    }

    fn save(&mut self, key: &str, value: String) {
        match self {
            Self::Writable(storage) => {
                storage.set_string(key, value);
                storage.flush();
            }
            Self::ReadOnly(_) | Self::Unavailable => {
                log::warn!("storage is not writable, dropping update of {key:?}");
            }
        }
    }
}

pub(crate) fn load_settings(storage: Option<&dyn Storage>) -> Settings {
    storage
        .and_then(|storage| eframe::get_value::<Settings>(storage, SETTINGS_KEY))
        .unwrap_or_default()
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use ristikko_game::{KeyValueStore, LETTERS_KEY};

    use super::*;

    #[derive(Default)]
    struct TestStorage {
        entries: HashMap<String, String>,
        flushes: usize,
    }

    impl Storage for TestStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.entries.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn writable_store_saves_and_flushes() {
        let mut storage = TestStorage::default();
        let mut store = EframeStore::writable(Some(&mut storage));
        store.save(LETTERS_KEY, r#"{"1":"A"}"#.to_owned());
        assert_eq!(store.load(LETTERS_KEY).as_deref(), Some(r#"{"1":"A"}"#));
        assert_eq!(storage.flushes, 1);
    }

    #[test]
    fn read_only_store_drops_writes() {
        let mut storage = TestStorage::default();
        storage.set_string(LETTERS_KEY, "{}".to_owned());

        let mut store = EframeStore::read_only(Some(&storage));
        store.save(LETTERS_KEY, r#"{"1":"A"}"#.to_owned());
        assert_eq!(store.load(LETTERS_KEY).as_deref(), Some("{}"));

        let mut missing = EframeStore::writable(None);
        missing.save(LETTERS_KEY, "{}".to_owned());
        assert_eq!(missing.load(LETTERS_KEY), None);
    }

    #[test]
    fn settings_round_trip() {
        let mut storage = TestStorage::default();
        assert_eq!(load_settings(Some(&storage)), Settings::default());
        assert_eq!(load_settings(None), Settings::default());

        let settings = Settings {
            show_keyboard: false,
            ..Settings::default()
        };
        save_settings(&mut storage, &settings);
        assert_eq!(load_settings(Some(&storage)), settings);
    }
}
