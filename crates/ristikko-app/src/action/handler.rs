use ristikko_game::KeyValueStore;

use crate::{
    action::{
        Action, ActionRequestQueue, AppAction, LetterAction, SelectionAction, SettingsAction,
        UiAction,
    },
    state::{AppState, UiState},
};

/// Handles queued actions in order, writing the letters after each one.
pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    store: &mut dyn KeyValueStore,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
        app_state.navigator.persist(store);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    log::trace!("handling {action:?}");
    match action {
        Action::App(action) => handle_app(app_state, ui_state, action),
        Action::Ui(action) => handle_ui(ui_state, action),
    }
}

fn handle_app(app_state: &mut AppState, ui_state: &mut UiState, action: AppAction) {
    let navigator = &mut app_state.navigator;
    match action {
        AppAction::Selection(SelectionAction::ClickCell(id)) => {
            if navigator.click_cell(id) {
                ui_state.text_channel.request_focus();
            }
        }
        AppAction::Selection(SelectionAction::ClearSelection) => navigator.clear_selection(),
        AppAction::Selection(SelectionAction::MoveSelection(direction)) => {
            let (axis, step) = direction.axis_step();
            navigator.move_selection(axis, step);
        }
        AppAction::Letter(LetterAction::Input(event)) => {
            navigator.apply(event);
        }
        AppAction::Letter(LetterAction::ClearAll) => navigator.clear_all(),
        AppAction::Settings(SettingsAction::UpdateSettings(settings)) => {
            if !settings.pinch_zoom {
                ui_state.zoom.reset();
            }
            app_state.update_settings(settings);
        }
    }
}

fn handle_ui(ui_state: &mut UiState, action: UiAction) {
    match action {
        UiAction::OpenModal(modal_request) => {
            ui_state.active_modal = Some(modal_request);
        }
        UiAction::CloseModal => {
            ui_state.active_modal = None;
        }
        UiAction::ToggleSidebar => ui_state.show_sidebar = !ui_state.show_sidebar,
        UiAction::Pinch(scale) => ui_state.zoom.pinch(scale),
        UiAction::ResetZoom => ui_state.zoom.reset(),
    }
}

#[cfg(test)]
mod tests {
    use ristikko_core::{Axis, CellId};
    use ristikko_game::{InputEvent, KeyValueStore, LETTERS_KEY, MemoryStore};

    use super::{handle, handle_all};
    use crate::{
        action::{
            Action, ActionRequestQueue, ConfirmKind, LetterAction, ModalRequest, MoveDirection,
            SelectionAction, SettingsAction, UiAction,
        },
        state::{AppState, Settings, UiState},
    };

    fn fresh_state() -> (AppState, UiState) {
        let app_state = AppState::load(&MemoryStore::default(), Settings::default());
        (app_state, UiState::new())
    }

    fn click(app_state: &mut AppState, ui_state: &mut UiState, id: u16) {
        handle(
            app_state,
            ui_state,
            SelectionAction::ClickCell(CellId::new(id)).into(),
        );
    }

    fn letter(app_state: &AppState, id: u16) -> Option<char> {
        app_state
            .navigator
            .letters()
            .get(CellId::new(id))
            .map(char::from)
    }

    #[test]
    fn click_selects_and_requests_text_focus() {
        let (mut app_state, mut ui_state) = fresh_state();
        click(&mut app_state, &mut ui_state, 23);

        assert_eq!(
            app_state.navigator.selection().selected(),
            Some(CellId::new(23))
        );
        assert!(ui_state.text_channel.take_focus_request());
        assert!(!ui_state.text_channel.take_focus_request());
    }

    #[test]
    fn click_on_special_cell_keeps_focus_request_clear() {
        let (mut app_state, mut ui_state) = fresh_state();
        click(&mut app_state, &mut ui_state, 25);

        assert_eq!(app_state.navigator.selection().selected(), None);
        assert!(!ui_state.text_channel.take_focus_request());
    }

    #[test]
    fn queued_input_is_persisted_after_each_action() {
        let (mut app_state, mut ui_state) = fresh_state();
        let mut store = MemoryStore::default();
        let mut queue = ActionRequestQueue::default();

        queue.request(SelectionAction::ClickCell(CellId::new(5)).into());
        queue.request(LetterAction::Input(InputEvent::Char('a')).into());
        handle_all(&mut app_state, &mut ui_state, &mut queue, &mut store);

        assert_eq!(letter(&app_state, 5), Some('A'));
        assert_eq!(
            app_state.navigator.selection().selected(),
            Some(CellId::new(6))
        );
        assert!(!app_state.navigator.is_dirty());
        let json = store.load(LETTERS_KEY).unwrap();
        assert!(json.contains(r#""5":"A""#));
    }

    #[test]
    fn arrows_move_and_set_axis() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::MoveSelection(MoveDirection::Down).into(),
        );
        assert_eq!(app_state.navigator.selection().selected(), None);

        click(&mut app_state, &mut ui_state, 23);
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::MoveSelection(MoveDirection::Down).into(),
        );
        assert_eq!(
            app_state.navigator.selection().selected(),
            Some(CellId::new(33))
        );
        assert_eq!(app_state.navigator.selection().axis(), Axis::Column);

        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::MoveSelection(MoveDirection::Left).into(),
        );
        assert_eq!(
            app_state.navigator.selection().selected(),
            Some(CellId::new(32))
        );
        assert_eq!(app_state.navigator.selection().axis(), Axis::Row);
    }

    #[test]
    fn escape_clears_selection() {
        let (mut app_state, mut ui_state) = fresh_state();
        click(&mut app_state, &mut ui_state, 23);
        handle(
            &mut app_state,
            &mut ui_state,
            SelectionAction::ClearSelection.into(),
        );
        assert_eq!(app_state.navigator.selection().selected(), None);
        assert_eq!(app_state.navigator.selection().last_clicked(), None);
    }

    #[test]
    fn confirmed_clear_all_blanks_letters() {
        let (mut app_state, mut ui_state) = fresh_state();
        click(&mut app_state, &mut ui_state, 21);
        for ch in ['k', 'i'] {
            handle(
                &mut app_state,
                &mut ui_state,
                LetterAction::Input(InputEvent::Char(ch)).into(),
            );
        }

        handle(
            &mut app_state,
            &mut ui_state,
            Action::Ui(UiAction::OpenModal(ModalRequest::Confirm(
                ConfirmKind::ClearAll,
            ))),
        );
        assert!(ui_state.active_modal.is_some());
        assert_eq!(letter(&app_state, 21), Some('K'));

        handle(
            &mut app_state,
            &mut ui_state,
            ConfirmKind::ClearAll.confirmed_action(),
        );
        handle(
            &mut app_state,
            &mut ui_state,
            Action::Ui(UiAction::CloseModal),
        );

        assert!(ui_state.active_modal.is_none());
        assert_eq!(letter(&app_state, 21), None);
        assert_eq!(letter(&app_state, 22), None);
        assert!(app_state.navigator.letters().contains_key(CellId::new(21)));
        assert_eq!(
            app_state.navigator.selection().selected(),
            Some(CellId::new(23))
        );
    }

    #[test]
    fn disabling_pinch_zoom_resets_zoom() {
        let (mut app_state, mut ui_state) = fresh_state();
        handle(&mut app_state, &mut ui_state, Action::Ui(UiAction::Pinch(2.0)));
        assert!(ui_state.zoom.is_zoomed());

        let settings = Settings {
            pinch_zoom: false,
            ..Settings::default()
        };
        handle(
            &mut app_state,
            &mut ui_state,
            SettingsAction::UpdateSettings(settings).into(),
        );
        assert!(!ui_state.zoom.is_zoomed());
        assert!(app_state.is_settings_dirty());
        assert!(!app_state.settings().pinch_zoom);
    }

    #[test]
    fn toggle_sidebar() {
        let (mut app_state, mut ui_state) = fresh_state();
        assert!(!ui_state.show_sidebar);
        handle(
            &mut app_state,
            &mut ui_state,
            Action::Ui(UiAction::ToggleSidebar),
        );
        assert!(ui_state.show_sidebar);
    }
}
