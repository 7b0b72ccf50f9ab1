//! Cell identifiers and per-cell metadata.

use std::fmt::{self, Display};

/// A 1-based cell identifier in row-major order.
///
/// Ids start at 1 in the top-left corner and increase left to right, then top to
/// bottom. The zero-based storage index is `id - 1`.
///
/// # Examples
///
/// ```
/// use ristikko_core::CellId;
///
/// let id = CellId::new(11);
/// assert_eq!(id.value(), 11);
/// assert_eq!(id.index(), 10);
/// assert_eq!(CellId::from_index(10), id);
///
/// assert_eq!(CellId::try_new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u16);

impl CellId {
    /// Creates a cell id from its 1-based value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        assert!(value > 0, "Cell id must be 1 or greater");
        Self(value)
    }

    /// Creates a cell id, returning `None` for zero.
    #[must_use]
    pub const fn try_new(value: u16) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Creates a cell id from a zero-based row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is `u16::MAX`.
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        assert!(index < u16::MAX, "Cell index out of range");
        Self(index + 1)
    }

    /// Returns the 1-based value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the zero-based row-major index.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0 - 1
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<CellId> for u16 {
    fn from(id: CellId) -> u16 {
        id.value()
    }
}

/// Whether a cell accepts letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellKind {
    /// A regular cell that can hold a letter and belongs to words.
    Open,
    /// A blocked cell. It never holds a letter and breaks words.
    Special {
        /// Presentation variant (the original puzzle sheet shades each block differently).
        style: u8,
    },
}

/// Immutable metadata for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    id: CellId,
    row: u16,
    col: u16,
    kind: CellKind,
    clue_number: Option<u8>,
}

impl Cell {
    pub(crate) const fn new(id: CellId, row: u16, col: u16, kind: CellKind) -> Self {
        Self {
            id,
            row,
            col,
            kind,
            clue_number: None,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    pub(crate) fn set_clue_number(&mut self, number: u8) {
        self.clue_number = Some(number);
    }

    /// Returns the id of this cell.
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn row(&self) -> u16 {
        self.row
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn col(&self) -> u16 {
        self.col
    }

    /// Returns the kind of this cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns `true` if the cell is blocked.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self.kind, CellKind::Special { .. })
    }

    /// Returns the printed clue number, if the cell starts a numbered clue.
    #[must_use]
    pub const fn clue_number(&self) -> Option<u8> {
        self.clue_number
    }
}
