//! Core data structures for crossword grids.
//!
//! This crate describes the static shape of a crossword and the pure navigation rules
//! that operate on it. Nothing here owns user input; entered letters and the current
//! selection live in `ristikko-game`.
//!
//! # Overview
//!
//! 1. **Identifiers and letters**
//!    - [`cell`]: 1-based [`CellId`]s in row-major order and immutable [`Cell`] metadata
//!    - [`letter`]: the accepted [`Letter`] alphabet (A–Z plus Å, Ä, Ö)
//!
//! 2. **Static configuration**
//!    - [`layout`]: [`Layout`] tables listing special cells and clue numbers
//!
//! 3. **Grid model and rules**
//!    - [`grid`]: the [`GridModel`] built once from a layout
//!    - [`axis`]: the [`Axis`] (row or column) and [`Step`] direction of travel
//!    - [`navigation`]: focus advance and initial axis selection
//!    - [`word`]: contiguous word runs used for highlighting
//!
//! # Examples
//!
//! ```
//! use ristikko_core::{Axis, CellId, GridModel, Step, layout::RISTIKKO_2021};
//!
//! let grid = GridModel::from_layout(&RISTIKKO_2021);
//! assert_eq!(grid.len(), 110);
//!
//! // Cell 25 is blacked out, so focus cannot move onto it from 24.
//! let next = grid.advance(CellId::new(24), Axis::Row, Step::Forward);
//! assert_eq!(next, None);
//!
//! // The word containing 24 runs from 21 to 24.
//! let run = grid.word_run(CellId::new(24), Axis::Row);
//! assert_eq!(run.first(), Some(&CellId::new(21)));
//! ```

pub mod axis;
pub mod cell;
pub mod grid;
pub mod layout;
pub mod letter;
pub mod navigation;
pub mod word;

pub use self::{
    axis::{Axis, Step},
    cell::{Cell, CellId, CellKind},
    grid::GridModel,
    layout::Layout,
    letter::{Letter, LetterError},
};
