//! Crossword play session state.
//!
//! [`GridNavigator`] ties together the immutable [`GridModel`] from `ristikko-core`,
//! the [`Selection`] state machine and the [`LetterStore`]. Every input channel
//! (physical keys, the on-screen keyboard, the hidden text field used by mobile soft
//! keyboards) is reduced to an [`InputEvent`] before it reaches the navigator.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use ristikko_core::{CellId, GridModel, layout::RISTIKKO_2021};
//! use ristikko_game::{GridNavigator, InputEvent, KeyValueStore as _, MemoryStore};
//!
//! let grid = Arc::new(GridModel::from_layout(&RISTIKKO_2021));
//! let mut navigator = GridNavigator::new(grid);
//!
//! navigator.click_cell(CellId::new(21));
//! navigator.apply(InputEvent::Char('k'));
//! navigator.apply(InputEvent::Char('i'));
//!
//! assert_eq!(navigator.letters().get(CellId::new(21)).map(char::from), Some('K'));
//! assert_eq!(navigator.selection().selected(), Some(CellId::new(23)));
//!
//! let mut store = MemoryStore::default();
//! navigator.persist(&mut store);
//! assert!(store.load(ristikko_game::LETTERS_KEY).is_some());
//! ```
//!
//! [`GridModel`]: ristikko_core::GridModel

pub use self::{error::*, input::*, letter_store::*, navigator::*, persistence::*, selection::*};

mod error;
mod input;
mod letter_store;
mod navigator;
mod persistence;
mod selection;
