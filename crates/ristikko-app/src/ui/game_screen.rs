use eframe::egui::{ScrollArea, Ui};
use egui_extras::{Size, StripBuilder};

use super::{grid, keyboard, text_field};
use crate::{
    action::ActionRequestQueue,
    state::TextChannel,
    ui::{
        grid::GridViewModel,
        keyboard::KeyboardViewModel,
        layout::{ComponentUnits, LayoutScale},
    },
};

/// Gap between the grid and the on-screen keyboard, in cell units.
const KEYBOARD_GAP_UNITS: f32 = 0.4;
const TEXT_FIELD_HEIGHT: f32 = 1.0;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) grid_vm: GridViewModel,
    pub(crate) keyboard_vm: Option<KeyboardViewModel>,
    pub(crate) zoom: f32,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        grid_vm: GridViewModel,
        keyboard_vm: Option<KeyboardViewModel>,
        zoom: f32,
    ) -> Self {
        Self {
            grid_vm,
            keyboard_vm,
            zoom,
        }
    }

    fn required_units(&self) -> ComponentUnits {
        let grid_units = self.grid_vm.required_units();
        match self.keyboard_vm {
            Some(_) => grid_units.stacked(keyboard::required_units(), KEYBOARD_GAP_UNITS),
            None => grid_units,
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GameScreenViewModel,
    text_channel: &mut TextChannel,
    action_queue: &mut ActionRequestQueue,
) {
    let available = ui.available_size();
    let base_scale = LayoutScale::fit(available, vm.required_units());
    let grid_scale = base_scale.zoomed(vm.zoom);
    let keyboard_height = vm.keyboard_vm.map_or(0.0, |_| {
        (keyboard::required_units().height + KEYBOARD_GAP_UNITS) * base_scale.cell_size
    });

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(keyboard_height))
        .size(Size::exact(TEXT_FIELD_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                if vm.zoom > 1.0 {
                    ScrollArea::both().auto_shrink(false).show(ui, |ui| {
                        grid::show(ui, &vm.grid_vm, &grid_scale, action_queue);
                    });
                } else {
                    ui.vertical_centered(|ui| {
                        grid::show(ui, &vm.grid_vm, &grid_scale, action_queue);
                    });
                }
            });
            strip.cell(|ui| {
                if let Some(keyboard_vm) = &vm.keyboard_vm {
                    ui.add_space(KEYBOARD_GAP_UNITS * base_scale.cell_size);
                    keyboard::show(ui, keyboard_vm, &base_scale, action_queue);
                }
            });
            strip.cell(|ui| {
                text_field::show(ui, text_channel, action_queue);
            });
        });
}
