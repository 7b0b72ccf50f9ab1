//! Ristikko crossword application UI.
//!
//! # Design Notes
//! - One fixed crossword layout; letters are saved after every handled action.
//! - Three input channels (physical keys, the on-screen keyboard, a hidden text field
//!   for soft keyboards) feed the same action queue.
//! - Settings live in a side panel and are saved separately from the letters.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue, UiAction},
    persistence::{self, EframeStore},
    state::{AppState, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct RistikkoApp {
    app_state: AppState,
    ui_state: UiState,
}

impl RistikkoApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let settings = persistence::load_settings(cc.storage);
        let app_state = AppState::load(&EframeStore::read_only(cc.storage), settings);
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn handle_actions(&mut self, action_queue: &mut ActionRequestQueue, frame: &mut Frame) {
        let mut store = EframeStore::writable(frame.storage_mut());
        action::handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            action_queue,
            &mut store,
        );
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_settings_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            persistence::save_settings(storage, self.app_state.settings());
            self.app_state.clear_settings_dirty();
        }
    }
}

impl App for RistikkoApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_settings(storage, self.app_state.settings());
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.ui_state.active_modal.is_none() {
            let text_field_focused = ui::text_field::has_focus(ctx);
            let pinch_zoom = self.app_state.settings().pinch_zoom;
            ctx.input(|i| {
                ui::input::handle_input(i, text_field_focused, &mut action_queue);
                if pinch_zoom
                    && let Some(touch) = i.multi_touch()
                    && (touch.zoom_delta - 1.0).abs() > f32::EPSILON
                {
                    action_queue.request(UiAction::Pinch(touch.zoom_delta).into());
                }
            });
            self.handle_actions(&mut action_queue, frame);
        }

        let toolbar_vm = view_model_builder::build_toolbar_vm(&self.app_state, &self.ui_state);
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show(ui, &toolbar_vm, &mut action_queue);
        });

        if self.ui_state.show_sidebar {
            let sidebar_vm = view_model_builder::build_sidebar_view_model(&self.app_state);
            SidePanel::right("sidebar").show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(
                ui,
                &game_screen_vm,
                &mut self.ui_state.text_channel,
                &mut action_queue,
            );
        });

        if let Some(modal_request) = self.ui_state.active_modal {
            ui::modal::show(ctx, &mut action_queue, modal_request);
        }

        self.handle_actions(&mut action_queue, frame);

        self.apply_persistence(frame);
    }
}
