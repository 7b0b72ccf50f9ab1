use eframe::egui::{
    Color32, Context, Id, Key, Modifiers, TextEdit, Ui, Vec2,
    text::{CCursor, CCursorRange},
};

use crate::{
    action::{ActionRequestQueue, LetterAction},
    state::TextChannel,
};

/// Keys the shortcut table already turns into actions. The field must not edit with them.
const NAVIGATION_KEYS: [Key; 5] = [
    Key::ArrowUp,
    Key::ArrowDown,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Delete,
];

pub(crate) fn id() -> Id {
    Id::new("ristikko_text_channel")
}

/// Returns `true` if the hidden text field currently has keyboard focus.
pub(crate) fn has_focus(ctx: &Context) -> bool {
    ctx.memory(|memory| memory.has_focus(id()))
}

/// Draws the hidden text field and turns its edits into input actions.
///
/// The field is a one-pixel, fully transparent single-line editor. Giving it focus
/// makes touch platforms open their soft keyboard.
///
/// The cursor is kept after the sentinel, so backspace always removes it and
/// forward deletion never does.
pub(crate) fn show(ui: &mut Ui, channel: &mut TextChannel, action_queue: &mut ActionRequestQueue) {
    ui.input_mut(|i| {
        for key in NAVIGATION_KEYS {
            i.consume_key(Modifiers::NONE, key);
        }
    });

    let editor = TextEdit::singleline(channel.input.buffer_mut())
        .id(id())
        .frame(false)
        .desired_width(1.0)
        .text_color(Color32::TRANSPARENT)
        .min_size(Vec2::splat(1.0));
    let mut output = editor.show(ui);

    if channel.take_focus_request() {
        output.response.request_focus();
    }
    if output.response.changed()
        && let Some(event) = channel.take_event()
    {
        action_queue.request(LetterAction::Input(event).into());
    }

    let end = CCursor::new(channel.input.buffer().chars().count());
    output.state.cursor.set_char_range(Some(CCursorRange::one(end)));
    output.state.store(ui.ctx(), output.response.id);
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use eframe::egui::{CentralPanel, Context, Event, Key, Modifiers, RawInput};
    use ristikko_game::InputEvent;

    use super::{has_focus, show};
    use crate::{
        action::{
            Action, ActionRequestQueue, AppAction, LetterAction, MoveDirection, SelectionAction,
        },
        state::TextChannel,
        ui::input::handle_input,
    };

    struct Harness {
        ctx: Context,
        channel: TextChannel,
    }

    impl Harness {
        fn focused() -> Self {
            let ctx = Context::default();
            ctx.options_mut(|options| options.max_passes = NonZeroUsize::MIN);
            let mut harness = Self {
                ctx,
                channel: TextChannel::default(),
            };
            harness.channel.request_focus();
            assert!(harness.frame(vec![]).is_empty());
            assert!(harness.frame(vec![]).is_empty());
            assert!(has_focus(&harness.ctx));
            harness
        }

        /// Runs one frame the way the app does: shortcuts first, then the field.
        fn frame(&mut self, events: Vec<Event>) -> Vec<Action> {
            let mut queue = ActionRequestQueue::default();
            let channel = &mut self.channel;
            let input = RawInput {
                events,
                ..RawInput::default()
            };
            let _ = self.ctx.run(input, |ctx| {
                let focused = has_focus(ctx);
                ctx.input(|i| handle_input(i, focused, &mut queue));
                CentralPanel::default().show(ctx, |ui| show(ui, channel, &mut queue));
            });
            queue.take_all()
        }
    }

    fn key_event(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn is_single_delete(actions: &[Action]) -> bool {
        matches!(
            actions,
            [Action::App(AppAction::Letter(LetterAction::Input(InputEvent::Delete)))]
        )
    }

    #[test]
    fn backspace_deletes_once() {
        let mut harness = Harness::focused();
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Backspace)])));
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Backspace)])));
    }

    #[test]
    fn typed_character_comes_from_the_field() {
        let mut harness = Harness::focused();
        let actions = harness.frame(vec![Event::Text("k".to_owned())]);
        assert!(matches!(
            actions.as_slice(),
            [Action::App(AppAction::Letter(LetterAction::Input(InputEvent::Char('k'))))]
        ));
        assert_eq!(harness.channel.input.buffer(), " ");
    }

    #[test]
    fn arrow_then_backspace_deletes_once() {
        let mut harness = Harness::focused();
        let actions = harness.frame(vec![key_event(Key::ArrowLeft)]);
        assert!(matches!(
            actions.as_slice(),
            [Action::App(AppAction::Selection(
                SelectionAction::MoveSelection(MoveDirection::Left)
            ))]
        ));
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Backspace)])));
    }

    #[test]
    fn arrow_then_delete_deletes_once() {
        let mut harness = Harness::focused();
        assert_eq!(harness.frame(vec![key_event(Key::ArrowUp)]).len(), 1);
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Delete)])));
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Delete)])));
    }

    #[test]
    fn home_then_backspace_deletes_once() {
        let mut harness = Harness::focused();
        assert!(harness.frame(vec![key_event(Key::Home)]).is_empty());
        assert!(is_single_delete(&harness.frame(vec![key_event(Key::Backspace)])));
    }
}
