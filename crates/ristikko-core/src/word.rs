//! Word runs.
//!
//! A word run is the maximal contiguous span of open cells along one axis that
//! contains a given cell. Runs stop at blocked cells and at grid edges.

use std::collections::BTreeSet;

use crate::{Axis, CellId, GridModel, Step};

impl GridModel {
    /// Returns the word run containing `id` along `axis`, in id order.
    ///
    /// Returns an empty vector if `id` is outside the grid or blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ristikko_core::{Axis, CellId, GridModel, layout::RISTIKKO_2021};
    ///
    /// let grid = GridModel::from_layout(&RISTIKKO_2021);
    /// let run: Vec<u16> = grid
    ///     .word_run(CellId::new(47), Axis::Row)
    ///     .into_iter()
    ///     .map(CellId::value)
    ///     .collect();
    /// assert_eq!(run, [46, 47, 48, 49, 50]);
    /// ```
    #[must_use]
    pub fn word_run(&self, id: CellId, axis: Axis) -> Vec<CellId> {
        if !self.is_selectable(id) {
            return vec![];
        }
        let mut start = id;
        while let Some(prev) = self.advance(start, axis, Step::Backward) {
            start = prev;
        }
        let mut run = vec![start];
        let mut current = start;
        while let Some(next) = self.advance(current, axis, Step::Forward) {
            run.push(next);
            current = next;
        }
        run
    }

    /// Returns the cells highlighted together with the selected cell.
    ///
    /// This is the word run of `selected` along `axis` without `selected` itself.
    #[must_use]
    pub fn highlight_set(&self, selected: CellId, axis: Axis) -> BTreeSet<CellId> {
        self.word_run(selected, axis)
            .into_iter()
            .filter(|&id| id != selected)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::layout::RISTIKKO_2021;

    fn grid() -> GridModel {
        GridModel::from_layout(&RISTIKKO_2021)
    }

    fn ids(values: &[u16]) -> BTreeSet<CellId> {
        values.iter().copied().map(CellId::new).collect()
    }

    #[test]
    fn test_row_run_stops_at_special() {
        let grid = grid();
        let set = grid.highlight_set(CellId::new(24), Axis::Row);
        assert_eq!(set, ids(&[21, 22, 23]));
        assert!(!set.contains(&CellId::new(25)));
        assert!(!set.contains(&CellId::new(24)));

        let set = grid.highlight_set(CellId::new(26), Axis::Row);
        assert_eq!(set, ids(&[27, 28, 29, 30]));
    }

    #[test]
    fn test_column_run() {
        let grid = grid();
        // column 4: 5, 15(blocked), 25(blocked), 35, 45(blocked), ...
        assert_eq!(grid.highlight_set(CellId::new(35), Axis::Column), ids(&[]));
        assert_eq!(
            grid.word_run(CellId::new(5), Axis::Column),
            vec![CellId::new(5)]
        );
        // column 2: 3, 13, ... 103, no blocks
        let run = grid.word_run(CellId::new(53), Axis::Column);
        assert_eq!(run.len(), 11);
        assert_eq!(run.first(), Some(&CellId::new(3)));
        assert_eq!(run.last(), Some(&CellId::new(103)));
    }

    #[test]
    fn test_blocked_or_missing_cell_has_no_run() {
        let grid = grid();
        assert!(grid.word_run(CellId::new(25), Axis::Row).is_empty());
        assert!(grid.highlight_set(CellId::new(200), Axis::Column).is_empty());
    }

    #[test]
    fn test_isolated_cell() {
        let grid = grid();
        assert!(grid.highlight_set(CellId::new(63), Axis::Row).is_empty());
    }

    proptest! {
        #[test]
        fn prop_run_is_maximal_and_contiguous(value in 1u16..=110, column in any::<bool>()) {
            let grid = grid();
            let axis = if column { Axis::Column } else { Axis::Row };
            let id = CellId::new(value);
            let run = grid.word_run(id, axis);
            if grid.is_selectable(id) {
                prop_assert!(run.contains(&id));
                for pair in run.windows(2) {
                    prop_assert_eq!(grid.advance(pair[0], axis, Step::Forward), Some(pair[1]));
                }
                let first = run[0];
                let last = run[run.len() - 1];
                prop_assert_eq!(grid.advance(first, axis, Step::Backward), None);
                prop_assert_eq!(grid.advance(last, axis, Step::Forward), None);
                // Every member sees the same run.
                for &member in &run {
                    prop_assert_eq!(&grid.word_run(member, axis), &run);
                }
            } else {
                prop_assert!(run.is_empty());
            }
        }
    }
}
