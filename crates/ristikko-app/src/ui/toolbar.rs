use eframe::egui::{Align, Button, Layout, Ui};

use crate::action::{ActionRequestQueue, ConfirmKind, ModalRequest, UiAction};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolbarViewModel {
    has_letters: bool,
    sidebar_open: bool,
    zoomed: bool,
}

impl ToolbarViewModel {
    #[must_use]
    pub(crate) fn new(has_letters: bool, sidebar_open: bool, zoomed: bool) -> Self {
        Self {
            has_letters,
            sidebar_open,
            zoomed,
        }
    }

    #[must_use]
    pub(crate) fn has_letters(&self) -> bool {
        self.has_letters
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ToolbarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let erase = ui
            .add_enabled(vm.has_letters(), Button::new("🗑 Erase all"))
            .on_hover_text("Clear every letter in the grid");
        if erase.clicked() {
            action_queue.request(
                UiAction::OpenModal(ModalRequest::Confirm(ConfirmKind::ClearAll)).into(),
            );
        }

        if vm.zoomed && ui.button("🔍 Reset zoom").clicked() {
            action_queue.request(UiAction::ResetZoom.into());
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add(Button::new("⚙ Settings").selected(vm.sidebar_open))
                .clicked()
            {
                action_queue.request(UiAction::ToggleSidebar.into());
            }
        });
    });
}
