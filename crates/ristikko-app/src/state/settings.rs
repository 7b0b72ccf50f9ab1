use serde::{Deserialize, Serialize};

/// User preferences, persisted separately from the letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Shade the rest of the selected word.
    pub(crate) highlight_word: bool,
    pub(crate) show_keyboard: bool,
    pub(crate) pinch_zoom: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_word: true,
            show_keyboard: true,
            pinch_zoom: true,
        }
    }
}
