use eframe::egui::{Button, RichText, Ui, Vec2};
use ristikko_game::InputEvent;

use crate::{
    action::{ActionRequestQueue, LetterAction},
    ui::layout::{ComponentUnits, LayoutScale},
};

const ROWS: [&str; 3] = ["QWERTYUIOPÅ", "ASDFGHJKLÖÄ", "ZXCVBNM"];
const DELETE_LABEL: &str = "⌫";
const DELETE_WIDTH_KEYS: f32 = 2.0;
const KEY_WIDTH_RATIO: f32 = 0.9;
const KEY_HEIGHT_RATIO: f32 = 1.0;
const LABEL_SIZE_RATIO: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Letter(char),
    Delete,
}

impl Key {
    fn event(self) -> InputEvent {
        match self {
            Self::Letter(ch) => InputEvent::Char(ch),
            Self::Delete => InputEvent::Delete,
        }
    }
}

/// Keys of one keyboard row, the delete key closing the last row.
fn row_keys(index: usize, row: &str) -> impl Iterator<Item = Key> + '_ {
    let delete = (index == ROWS.len() - 1).then_some(Key::Delete);
    row.chars().map(Key::Letter).chain(delete)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyboardViewModel {
    enabled: bool,
}

impl KeyboardViewModel {
    #[must_use]
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[must_use]
#[expect(clippy::cast_precision_loss)]
pub(crate) fn required_units() -> ComponentUnits {
    let widest = ROWS
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or_default() as f32;
    let rows = ROWS.len() as f32;
    ComponentUnits::new(
        widest * (KEY_WIDTH_RATIO + LayoutScale::SPACING_FACTOR.x),
        rows * (KEY_HEIGHT_RATIO + LayoutScale::SPACING_FACTOR.y),
    )
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &KeyboardViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let key_size = Vec2::new(
        scale.cell_size * KEY_WIDTH_RATIO,
        scale.cell_size * KEY_HEIGHT_RATIO,
    );
    let label_size = scale.cell_size * LABEL_SIZE_RATIO;

    ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing = scale.spacing;
        for (index, row) in ROWS.iter().enumerate() {
            ui.horizontal(|ui| {
                // center shorter rows under the widest one
                let keys = row_keys(index, row).collect::<Vec<_>>();
                #[expect(clippy::cast_precision_loss)]
                let row_width = keys
                    .iter()
                    .map(|key| match key {
                        Key::Letter(_) => key_size.x,
                        Key::Delete => key_size.x * DELETE_WIDTH_KEYS,
                    })
                    .sum::<f32>()
                    + scale.spacing.x * keys.len().saturating_sub(1) as f32;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                for key in keys {
                    let (label, size, hover) = match key {
                        Key::Letter(ch) => (ch.to_string(), key_size, "Enter letter"),
                        Key::Delete => (
                            DELETE_LABEL.to_owned(),
                            Vec2::new(key_size.x * DELETE_WIDTH_KEYS, key_size.y),
                            "Delete letter",
                        ),
                    };
                    let button = Button::new(RichText::new(label).size(label_size)).min_size(size);
                    let response = ui.add_enabled(vm.enabled, button).on_hover_text(hover);
                    if response.clicked() {
                        action_queue.request(LetterAction::Input(key.event()).into());
                    }
                }
            });
        }
    });
}
