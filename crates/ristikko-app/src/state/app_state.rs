use std::sync::Arc;

use ristikko_core::{GridModel, layout::RISTIKKO_2021};
use ristikko_game::{GridNavigator, KeyValueStore};

use crate::state::Settings;

// AppState holds the puzzle session and the user's preferences. Both are persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) navigator: GridNavigator,
    settings: Settings,
    settings_dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(navigator: GridNavigator, settings: Settings) -> Self {
        Self {
            navigator,
            settings,
            settings_dirty: false,
        }
    }

    /// Restores the shipped crossword from `store`.
    #[must_use]
    pub(crate) fn load(store: &dyn KeyValueStore, settings: Settings) -> Self {
        let grid = Arc::new(GridModel::from_layout(&RISTIKKO_2021));
        Self::new(GridNavigator::load(grid, store), settings)
    }

    #[must_use]
    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn update_settings(&mut self, settings: Settings) {
        if self.settings != settings {
            log::debug!("settings changed: {settings:?}");
            self.settings = settings;
            self.settings_dirty = true;
        }
    }

    #[must_use]
    pub(crate) fn is_settings_dirty(&self) -> bool {
        self.settings_dirty
    }

    pub(crate) fn clear_settings_dirty(&mut self) {
        self.settings_dirty = false;
    }
}
