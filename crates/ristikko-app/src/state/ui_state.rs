use ristikko_game::{InputEvent, VirtualInput};

use crate::{action::ModalRequest, state::Zoom};

// UiState holds ephemeral UI-only state (modal, zoom, hidden text field). It is not persisted.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) show_sidebar: bool,
    pub(crate) zoom: Zoom,
    pub(crate) text_channel: TextChannel,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

/// The hidden single-line text field that raises mobile soft keyboards.
#[derive(Debug, Default)]
pub(crate) struct TextChannel {
    pub(crate) input: VirtualInput,
    focus_requested: bool,
}

impl TextChannel {
    /// Asks the field to take keyboard focus on the next frame.
    pub(crate) fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Returns and resets the pending focus request.
    pub(crate) fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Interprets the field after an edit.
    pub(crate) fn take_event(&mut self) -> Option<InputEvent> {
        self.input.take_event()
    }
}
