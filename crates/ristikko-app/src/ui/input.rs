use eframe::egui::{Event, InputState, Key};
use ristikko_game::InputEvent;

use crate::action::{
    Action, ActionRequestQueue, AppAction, LetterAction, MoveDirection, SelectionAction,
};

struct Shortcut {
    key: Key,
    action: Action,
    /// The hidden text field reports this key itself while it has focus.
    seen_by_text_field: bool,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self {
            key,
            action,
            seen_by_text_field: false,
        }
    }

    const fn editing(key: Key, action: Action) -> Self {
        Self {
            key,
            action,
            seen_by_text_field: true,
        }
    }
}

const fn selection(action: SelectionAction) -> Action {
    Action::App(AppAction::Selection(action))
}

const DELETE: Action = Action::App(AppAction::Letter(LetterAction::Input(InputEvent::Delete)));

const SHORTCUTS: [Shortcut; 7] = [
    Shortcut::plain(
        Key::ArrowUp,
        selection(SelectionAction::MoveSelection(MoveDirection::Up)),
    ),
    Shortcut::plain(
        Key::ArrowDown,
        selection(SelectionAction::MoveSelection(MoveDirection::Down)),
    ),
    Shortcut::plain(
        Key::ArrowLeft,
        selection(SelectionAction::MoveSelection(MoveDirection::Left)),
    ),
    Shortcut::plain(
        Key::ArrowRight,
        selection(SelectionAction::MoveSelection(MoveDirection::Right)),
    ),
    Shortcut::plain(Key::Escape, selection(SelectionAction::ClearSelection)),
    Shortcut::editing(Key::Backspace, DELETE),
    Shortcut::plain(Key::Delete, DELETE),
];

/// Translates physical key presses and typed text into actions, in arrival order.
///
/// While the hidden text field has focus, typed text and backspace reach the
/// navigator through the field instead, so they are skipped here.
pub(crate) fn handle_input(
    i: &InputState,
    text_field_focused: bool,
    action_queue: &mut ActionRequestQueue,
) {
    if i.modifiers.command || i.modifiers.alt {
        return;
    }

    for event in &i.events {
        match event {
            Event::Key { key, pressed: true, .. } => {
                for shortcut in SHORTCUTS {
                    let handled_by_field = text_field_focused && shortcut.seen_by_text_field;
                    if shortcut.key == *key && !handled_by_field {
                        action_queue.request(shortcut.action);
                        break;
                    }
                }
            }
            Event::Text(text) if !text_field_focused => {
                for ch in text.chars() {
                    action_queue.request(LetterAction::Input(InputEvent::Char(ch)).into());
                }
            }
            _ => {}
        }
    }
}
