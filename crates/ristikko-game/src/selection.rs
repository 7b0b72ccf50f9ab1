use ristikko_core::{Axis, CellId, GridModel};

/// The selected cell and the direction words are entered in.
///
/// Selection changes in two ways: a click ([`on_cell_click`](Self::on_cell_click)),
/// which may also pick or toggle the axis, and focus movement after input, which
/// only moves the selected cell. The selected cell is never a blocked cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: Option<CellId>,
    last_clicked: Option<CellId>,
    axis: Axis,
}

impl Selection {
    /// Returns the selected cell.
    #[must_use]
    pub fn selected(&self) -> Option<CellId> {
        self.selected
    }

    /// Returns the most recently clicked cell.
    #[must_use]
    pub fn last_clicked(&self) -> Option<CellId> {
        self.last_clicked
    }

    /// Returns the current axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Handles a click on `id`.
    ///
    /// Clicks on blocked cells or ids outside the grid are ignored and return
    /// `false`. A repeated click on the last clicked cell toggles the axis; a click on
    /// any other cell picks the axis with [`GridModel::determine_axis`]. The clicked
    /// cell becomes both the selected and the last clicked cell.
    pub fn on_cell_click(&mut self, grid: &GridModel, id: CellId) -> bool {
        if !grid.is_selectable(id) {
            return false;
        }
        if self.last_clicked == Some(id) {
            self.axis.toggle();
        } else {
            self.axis = grid.determine_axis(id);
        }
        self.selected = Some(id);
        self.last_clicked = Some(id);
        true
    }

    /// Moves the selection to `id` without touching the click history.
    pub(crate) fn move_to(&mut self, id: CellId) {
        self.selected = Some(id);
    }

    /// Forces the axis.
    pub(crate) fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Forgets the selection and the click history. The axis is kept.
    pub fn clear(&mut self) {
        self.selected = None;
        self.last_clicked = None;
    }
}
