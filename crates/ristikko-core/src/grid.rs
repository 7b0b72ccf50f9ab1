//! The immutable grid model.

use std::collections::BTreeSet;

use crate::{Cell, CellId, CellKind, Layout};

/// Structural description of a crossword grid.
///
/// Built once from a [`Layout`] (or from raw dimensions) and never mutated afterwards.
/// Letters entered by the player are not part of the model.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use ristikko_core::{CellId, GridModel};
///
/// let specials = BTreeSet::from([CellId::new(3)]);
/// let grid = GridModel::build(4, 2, &specials);
///
/// assert_eq!(grid.len(), 8);
/// let cell = grid.cell(CellId::new(6)).unwrap();
/// assert_eq!((cell.row(), cell.col()), (1, 1));
/// assert!(grid.is_special(CellId::new(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl GridModel {
    /// Builds `width * height` cells in row-major order.
    ///
    /// Cell `id` lands on row `(id - 1) / width` and column `(id - 1) % width`.
    /// Ids in `special_ids` become blocked cells; ids outside the grid are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or `width * height` does not fit in a `u16`.
    #[must_use]
    pub fn build(width: u16, height: u16, special_ids: &BTreeSet<CellId>) -> Self {
        assert!(width > 0, "Grid width must be positive");
        let Some(len) = width.checked_mul(height) else {
            panic!("Grid size must fit in u16");
        };
        let cells = (0..len)
            .map(|index| {
                let id = CellId::from_index(index);
                let kind = if special_ids.contains(&id) {
                    CellKind::Special { style: 0 }
                } else {
                    CellKind::Open
                };
                Cell::new(id, index / width, index % width, kind)
            })
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds the model for a layout, including block styles and clue numbers.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let mut this = Self::build(layout.width, layout.height(), &layout.special_ids());
        for special in layout.special_cells {
            if let Some(cell) = CellId::try_new(special.id).and_then(|id| this.cell_mut(id)) {
                cell.set_kind(CellKind::Special {
                    style: special.style,
                });
            }
        }
        for clue in layout.clues {
            if let Some(cell) = CellId::try_new(clue.id).and_then(|id| this.cell_mut(id)) {
                cell.set_clue_number(clue.number);
            }
        }
        this
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(usize::from(id.index()))
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns all cells in id order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell with the given id, or `None` if it is outside the grid.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(usize::from(id.index()))
    }

    /// Returns the id at a zero-based row and column, or `None` outside the grid.
    #[must_use]
    pub fn id_at(&self, row: u16, col: u16) -> Option<CellId> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(CellId::from_index(row * self.width + col))
    }

    /// Returns `true` if the id is inside the grid.
    #[must_use]
    pub fn contains(&self, id: CellId) -> bool {
        self.cell(id).is_some()
    }

    /// Returns `true` if the id refers to a blocked cell.
    #[must_use]
    pub fn is_special(&self, id: CellId) -> bool {
        self.cell(id).is_some_and(Cell::is_special)
    }

    /// Returns `true` if the cell exists and can hold a letter.
    ///
    /// Only selectable cells can become the selection or a navigation target.
    #[must_use]
    pub fn is_selectable(&self, id: CellId) -> bool {
        self.cell(id).is_some_and(|cell| !cell.is_special())
    }
}
