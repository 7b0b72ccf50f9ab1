use std::{collections::BTreeSet, sync::Arc};

use ristikko_core::{Axis, CellId, GridModel, Letter, Step};

use crate::{InputEvent, KeyValueStore, LETTERS_KEY, LetterStore, Selection};

/// A crossword play session.
///
/// Owns the selection and the entered letters for one immutable grid. Letter
/// mutations mark the session dirty; [`persist`](Self::persist) writes a full
/// snapshot and clears the flag. The app persists after every handled event, so each
/// event completes its mutation and its write before the next one starts.
#[derive(Debug, Clone)]
pub struct GridNavigator {
    grid: Arc<GridModel>,
    selection: Selection,
    letters: LetterStore,
    dirty: bool,
}

impl GridNavigator {
    /// Creates a session with no letters and nothing selected.
    #[must_use]
    pub fn new(grid: Arc<GridModel>) -> Self {
        Self::with_letters(grid, LetterStore::new())
    }

    /// Creates a session from existing letters.
    ///
    /// Entries for blocked cells or ids outside the grid are dropped.
    #[must_use]
    pub fn with_letters(grid: Arc<GridModel>, mut letters: LetterStore) -> Self {
        let before = letters.len();
        letters.retain(|id| grid.is_selectable(id));
        let dropped = before - letters.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} stored letters outside the open cells");
        }
        Self {
            grid,
            selection: Selection::default(),
            letters,
            dirty: false,
        }
    }

    /// Restores letters from `store`, starting empty if the snapshot is absent or
    /// not a JSON object of strings. Invalid entries are skipped.
    #[must_use]
    pub fn load(grid: Arc<GridModel>, store: &dyn KeyValueStore) -> Self {
        let letters = match store.load(LETTERS_KEY) {
            None => {
                log::debug!("no saved letters under {LETTERS_KEY:?}");
                LetterStore::new()
            }
            Some(json) => LetterStore::from_json(&json).unwrap_or_else(|err| {
                log::warn!("ignoring saved letters: {err}");
                LetterStore::new()
            }),
        };
        log::info!("restored {} letter entries", letters.len());
        Self::with_letters(grid, letters)
    }

    /// Returns the grid model.
    #[must_use]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Returns the selection state.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the entered letters.
    #[must_use]
    pub fn letters(&self) -> &LetterStore {
        &self.letters
    }

    /// Returns `true` if letters changed since the last [`persist`](Self::persist).
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Handles a click on a cell. See [`Selection::on_cell_click`].
    pub fn click_cell(&mut self, id: CellId) -> bool {
        let accepted = self.selection.on_cell_click(&self.grid, id);
        if accepted {
            log::trace!("selected cell {id} ({:?})", self.selection.axis());
        } else {
            log::trace!("ignored click on cell {id}");
        }
        accepted
    }

    /// Drops the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Moves the selection one step along `axis` and makes `axis` current.
    ///
    /// Does nothing if no cell is selected or the step is refused.
    pub fn move_selection(&mut self, axis: Axis, step: Step) -> bool {
        let Some(current) = self.selection.selected() else {
            return false;
        };
        let Some(next) = self.grid.advance(current, axis, step) else {
            return false;
        };
        self.selection.set_axis(axis);
        self.selection.move_to(next);
        true
    }

    /// Steps focus from `from` along the current axis, if the step is allowed.
    fn advance_from(&mut self, from: CellId, step: Step) {
        if let Some(next) = self.grid.advance(from, self.selection.axis(), step) {
            self.selection.move_to(next);
        }
    }

    /// Enters `ch` at `id` and advances focus forward.
    ///
    /// Characters outside the alphabet are ignored. Lowercase letters are stored
    /// uppercase. Does nothing if `id` is `None` or not an open cell.
    pub fn set_letter(&mut self, id: Option<CellId>, ch: char) -> bool {
        let Some(letter) = Letter::from_char(ch) else {
            log::trace!("ignored character {ch:?}");
            return false;
        };
        let Some(id) = id.filter(|&id| self.grid.is_selectable(id)) else {
            return false;
        };
        self.letters.set(id, letter);
        self.dirty = true;
        self.advance_from(id, Step::Forward);
        true
    }

    /// Blanks the letter at `id` and moves focus back.
    ///
    /// Does nothing if `id` is `None` or not an open cell.
    pub fn clear_letter(&mut self, id: Option<CellId>) -> bool {
        let Some(id) = id.filter(|&id| self.grid.is_selectable(id)) else {
            return false;
        };
        self.letters.clear(id);
        self.dirty = true;
        self.advance_from(id, Step::Backward);
        true
    }

    /// Blanks every stored letter. The selection is kept.
    pub fn clear_all(&mut self) {
        self.letters.clear_all();
        self.dirty = true;
        log::info!("cleared all letters");
    }

    /// Applies an input event to the selected cell.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let selected = self.selection.selected();
        match event {
            InputEvent::Char(ch) => self.set_letter(selected, ch),
            InputEvent::Delete => self.clear_letter(selected),
        }
    }

    /// Returns the cells of the selected word, excluding the selected cell.
    #[must_use]
    pub fn highlight_set(&self) -> BTreeSet<CellId> {
        self.selection
            .selected()
            .map(|id| self.grid.highlight_set(id, self.selection.axis()))
            .unwrap_or_default()
    }

    /// Writes the letter snapshot to `store` if anything changed.
    ///
    /// Encoding failures are logged and dropped.
    pub fn persist(&mut self, store: &mut dyn KeyValueStore) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        match self.letters.to_json() {
            Ok(json) => {
                log::debug!("saving {} letter entries", self.letters.len());
                store.save(LETTERS_KEY, json);
            }
            Err(err) => log::warn!("failed to encode letters: {err}"),
        }
    }
}
