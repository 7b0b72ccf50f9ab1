use std::collections::BTreeSet;

use ristikko_core::CellKind;

use crate::{
    state::{AppState, UiState},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridViewModel, GridVisualState},
        keyboard::KeyboardViewModel,
        sidebar::SidebarViewModel,
        toolbar::ToolbarViewModel,
    },
};

#[must_use]
pub(crate) fn build_toolbar_vm(app_state: &AppState, ui_state: &UiState) -> ToolbarViewModel {
    let has_letters = app_state
        .navigator
        .letters()
        .iter()
        .any(|(_, letter)| letter.is_some());
    ToolbarViewModel::new(has_letters, ui_state.show_sidebar, ui_state.zoom.is_zoomed())
}

fn build_grid(app_state: &AppState) -> GridViewModel {
    let navigator = &app_state.navigator;
    let grid = navigator.grid();
    let selected = navigator.selection().selected();
    let word = if app_state.settings().highlight_word {
        navigator.highlight_set()
    } else {
        BTreeSet::new()
    };

    let cells = grid
        .cells()
        .iter()
        .map(|cell| {
            let id = cell.id();
            let mut visual_state = GridVisualState::empty();
            let special_style = match cell.kind() {
                CellKind::Special { style } => {
                    visual_state.insert(GridVisualState::SPECIAL);
                    Some(style)
                }
                CellKind::Open => None,
            };
            if selected == Some(id) {
                visual_state.insert(GridVisualState::SELECTED);
            }
            if word.contains(&id) {
                visual_state.insert(GridVisualState::WORD);
            }
            GridCell {
                id,
                visual_state,
                special_style,
                clue_number: cell.clue_number(),
                letter: navigator.letters().get(id),
            }
        })
        .collect();

    GridViewModel::new(grid.width(), grid.height(), cells)
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
) -> GameScreenViewModel {
    let grid_vm = build_grid(app_state);
    let keyboard_vm = app_state.settings().show_keyboard.then(|| {
        let has_selection = app_state.navigator.selection().selected().is_some();
        KeyboardViewModel::new(has_selection)
    });
    GameScreenViewModel::new(grid_vm, keyboard_vm, ui_state.zoom.factor())
}

#[must_use]
pub(crate) fn build_sidebar_view_model(app_state: &AppState) -> SidebarViewModel {
    SidebarViewModel::new(app_state.settings().clone())
}
