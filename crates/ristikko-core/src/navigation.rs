//! Focus movement rules.
//!
//! Movement is always a single step along one axis. A step never wraps to another
//! row or column, never leaves the grid and never lands on a blocked cell; in all of
//! those cases the step is simply refused.

use crate::{Axis, CellId, GridModel, Step};

impl GridModel {
    /// Returns the cell adjacent to `current` along `axis`, ignoring cell kinds.
    ///
    /// Returns `None` if `current` is outside the grid or the step would leave the
    /// current row (for [`Axis::Row`]) or column (for [`Axis::Column`]).
    #[must_use]
    pub fn neighbor(&self, current: CellId, axis: Axis, step: Step) -> Option<CellId> {
        if !self.contains(current) {
            return None;
        }
        let width = i32::from(self.width());
        let index = i32::from(current.index());
        let stride = match axis {
            Axis::Row => 1,
            Axis::Column => width,
        };
        let next = index + step.delta() * stride;
        let len = i32::try_from(self.len()).ok()?;
        if !(0..len).contains(&next) {
            return None;
        }
        let same_line = match axis {
            Axis::Row => next / width == index / width,
            Axis::Column => next % width == index % width,
        };
        if !same_line {
            return None;
        }
        u16::try_from(next).ok().map(CellId::from_index)
    }

    /// Computes where focus goes after one step from `current`.
    ///
    /// The next index is `(current - 1) + step * (1 or width)`. The move is refused
    /// (returns `None`) if it would wrap to another row or column, leave the grid, or
    /// land on a blocked cell. Blocked cells are not skipped over.
    ///
    /// # Examples
    ///
    /// ```
    /// use ristikko_core::{Axis, CellId, GridModel, Step, layout::RISTIKKO_2021};
    ///
    /// let grid = GridModel::from_layout(&RISTIKKO_2021);
    /// assert_eq!(
    ///     grid.advance(CellId::new(1), Axis::Row, Step::Forward),
    ///     Some(CellId::new(2))
    /// );
    /// // No wrap from the end of row 0 to the start of row 1.
    /// assert_eq!(grid.advance(CellId::new(10), Axis::Row, Step::Forward), None);
    /// // Cell 15 is blocked.
    /// assert_eq!(grid.advance(CellId::new(5), Axis::Column, Step::Forward), None);
    /// ```
    #[must_use]
    pub fn advance(&self, current: CellId, axis: Axis, step: Step) -> Option<CellId> {
        self.neighbor(current, axis, step)
            .filter(|&next| self.is_selectable(next))
    }

    /// Picks the axis a freshly clicked cell should start in.
    ///
    /// If the cell has a selectable left or right neighbor it starts in
    /// [`Axis::Row`]; an isolated cell with no horizontal run starts in
    /// [`Axis::Column`].
    #[must_use]
    pub fn determine_axis(&self, id: CellId) -> Axis {
        let has_horizontal_neighbor = [Step::Backward, Step::Forward]
            .into_iter()
            .any(|step| self.advance(id, Axis::Row, step).is_some());
        if has_horizontal_neighbor {
            Axis::Row
        } else {
            Axis::Column
        }
    }
}
