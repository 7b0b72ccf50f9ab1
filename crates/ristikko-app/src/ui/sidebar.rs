use eframe::egui::{RichText, ScrollArea, Ui, widgets};

use crate::{
    action::{ActionRequestQueue, SettingsAction},
    state::Settings,
    version,
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel {
    settings: Settings,
}

impl SidebarViewModel {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    let mut changed = false;
    let mut settings = vm.settings.clone();
    let Settings {
        highlight_word,
        show_keyboard,
        pinch_zoom,
    } = &mut settings;

    ScrollArea::vertical().show(ui, |ui| {
        ui.heading("⚙ Settings");
        ui.indent("sidebar_settings", |ui| {
            changed |= ui
                .checkbox(highlight_word, "Highlight the selected word")
                .changed();
            changed |= ui.checkbox(show_keyboard, "On-screen keyboard").changed();
            changed |= ui
                .checkbox(pinch_zoom, "Pinch to zoom the grid")
                .changed();

            ui.add_space(8.0);
            ui.label("Appearance");
            widgets::global_theme_preference_buttons(ui);
        });

        ui.add_space(16.0);
        ui.label(RichText::new(format!("Version {}", version::build_version())).weak());
    });

    if changed {
        action_queue.request(SettingsAction::UpdateSettings(settings).into());
    }
}
