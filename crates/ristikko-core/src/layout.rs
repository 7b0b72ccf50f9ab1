//! Static puzzle layouts.
//!
//! A layout is pure configuration: grid dimensions, which cells are blocked (and how
//! they are shaded), and which cells carry a printed clue number. It is kept as data
//! tables keyed by cell id so the grid builder never branches on specific ids.

use std::collections::BTreeSet;

use crate::CellId;

/// A blocked cell in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialCell {
    /// 1-based cell id.
    pub id: u16,
    /// Presentation variant, 1-based.
    pub style: u8,
}

impl SpecialCell {
    const fn new(id: u16, style: u8) -> Self {
        Self { id, style }
    }
}

/// A printed clue number in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    /// 1-based cell id.
    pub id: u16,
    /// The number printed in the cell corner.
    pub number: u8,
}

impl Clue {
    const fn new(id: u16, number: u8) -> Self {
        Self { id, number }
    }
}

/// Static description of a crossword sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Cells per row.
    pub width: u16,
    /// Total number of cells on the sheet.
    pub cell_count: u16,
    /// Blocked cells.
    pub special_cells: &'static [SpecialCell],
    /// Numbered cells.
    pub clues: &'static [Clue],
}

impl Layout {
    /// Returns the number of rows, `ceil(cell_count / width)`.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.cell_count.div_ceil(self.width)
    }

    /// Returns the ids of all blocked cells.
    #[must_use]
    pub fn special_ids(&self) -> BTreeSet<CellId> {
        self.special_cells
            .iter()
            .filter_map(|special| CellId::try_new(special.id))
            .collect()
    }
}

/// The 2021 sheet: 10 columns, 11 rows.
pub const RISTIKKO_2021: Layout = Layout {
    width: 10,
    cell_count: 110,
    special_cells: &[
        SpecialCell::new(15, 1),
        SpecialCell::new(25, 2),
        SpecialCell::new(45, 3),
        SpecialCell::new(57, 4),
        SpecialCell::new(58, 5),
        SpecialCell::new(60, 6),
        SpecialCell::new(62, 7),
        SpecialCell::new(64, 8),
        SpecialCell::new(65, 9),
        SpecialCell::new(66, 10),
        SpecialCell::new(75, 11),
        SpecialCell::new(85, 12),
        SpecialCell::new(105, 13),
    ],
    clues: &[
        Clue::new(23, 1),
        Clue::new(29, 2),
        Clue::new(42, 3),
        Clue::new(70, 4),
        Clue::new(93, 5),
        Clue::new(107, 6),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ristikko_2021_dimensions() {
        assert_eq!(RISTIKKO_2021.width, 10);
        assert_eq!(RISTIKKO_2021.height(), 11);
        assert_eq!(RISTIKKO_2021.special_ids().len(), 13);
    }

    #[test]
    fn test_height_rounds_up() {
        let layout = Layout {
            width: 10,
            cell_count: 101,
            special_cells: &[],
            clues: &[],
        };
        assert_eq!(layout.height(), 11);
    }

    #[test]
    fn test_clues_are_not_blocked() {
        let specials = RISTIKKO_2021.special_ids();
        for clue in RISTIKKO_2021.clues {
            assert!(!specials.contains(&CellId::new(clue.id)));
        }
    }
}
