use std::mem;

use ristikko_core::{Axis, CellId, Step};
use ristikko_game::InputEvent;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Selection(SelectionAction),
    Letter(LetterAction),
    Settings(SettingsAction),
}

#[derive(Debug)]
pub(crate) enum SelectionAction {
    ClickCell(CellId),
    ClearSelection,
    MoveSelection(MoveDirection),
}

#[derive(Debug)]
pub(crate) enum LetterAction {
    Input(InputEvent),
    ClearAll,
}

#[derive(Debug)]
pub(crate) enum SettingsAction {
    UpdateSettings(Settings),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenModal(ModalRequest),
    CloseModal,
    ToggleSidebar,
    Pinch(f32),
    ResetZoom,
}

impl From<SelectionAction> for Action {
    fn from(action: SelectionAction) -> Self {
        Action::App(action.into())
    }
}

impl From<LetterAction> for Action {
    fn from(action: LetterAction) -> Self {
        Action::App(action.into())
    }
}

impl From<SettingsAction> for Action {
    fn from(action: SettingsAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmKind {
    ClearAll,
}

impl ConfirmKind {
    /// The action performed when the user confirms.
    pub(crate) fn confirmed_action(self) -> Action {
        match self {
            Self::ClearAll => LetterAction::ClearAll.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalRequest {
    Confirm(ConfirmKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Left and right travel along the row, up and down along the column.
    pub(crate) fn axis_step(self) -> (Axis, Step) {
        match self {
            Self::Up => (Axis::Column, Step::Backward),
            Self::Down => (Axis::Column, Step::Forward),
            Self::Left => (Axis::Row, Step::Backward),
            Self::Right => (Axis::Row, Step::Forward),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use ristikko_core::{Axis, Step};
    use ristikko_game::InputEvent;

    use super::{
        Action, ActionRequestQueue, AppAction, ConfirmKind, LetterAction, MoveDirection, UiAction,
    };

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(LetterAction::Input(InputEvent::Delete).into());
        queue.request(Action::Ui(UiAction::ResetZoom));

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(
            drained[0],
            Action::App(AppAction::Letter(LetterAction::Input(InputEvent::Delete)))
        ));
        assert!(matches!(drained[1], Action::Ui(UiAction::ResetZoom)));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }

    #[test]
    fn move_direction_maps_to_axis() {
        assert_eq!(MoveDirection::Left.axis_step(), (Axis::Row, Step::Backward));
        assert_eq!(MoveDirection::Right.axis_step(), (Axis::Row, Step::Forward));
        assert_eq!(MoveDirection::Up.axis_step(), (Axis::Column, Step::Backward));
        assert_eq!(MoveDirection::Down.axis_step(), (Axis::Column, Step::Forward));
    }

    #[test]
    fn confirm_clear_all_requests_clear() {
        assert!(matches!(
            ConfirmKind::ClearAll.confirmed_action(),
            Action::App(AppAction::Letter(LetterAction::ClearAll))
        ));
    }
}
