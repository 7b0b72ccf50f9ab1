use std::sync::Arc;

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};
use ristikko_core::{CellId, Letter};

use crate::{
    action::{ActionRequestQueue, SelectionAction},
    ui::{
        grid_theme::{GridPalette, GridTheme},
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const WORD = 0b0000_0010;
        const SPECIAL = 0b0000_0100;
    }
}

/// What the painter needs to know about one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) id: CellId,
    pub(crate) visual_state: GridVisualState,
    pub(crate) special_style: Option<u8>,
    pub(crate) clue_number: Option<u8>,
    pub(crate) letter: Option<Letter>,
}

impl GridCell {
    #[must_use]
    pub(crate) fn is_special(&self) -> bool {
        self.visual_state.contains(GridVisualState::SPECIAL)
    }

    #[must_use]
    pub(crate) fn is_selected(&self) -> bool {
        self.visual_state.contains(GridVisualState::SELECTED)
    }

    #[must_use]
    pub(crate) fn is_in_highlight_set(&self) -> bool {
        self.visual_state.contains(GridVisualState::WORD)
    }
}

/// Cells in row-major order.
#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(width: u16, height: u16, cells: Vec<GridCell>) -> Self {
        debug_assert_eq!(cells.len(), usize::from(width) * usize::from(height));
        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub(crate) fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn cell(&self, id: CellId) -> Option<&GridCell> {
        self.cells.get(usize::from(id.index()))
    }

    #[must_use]
    pub(crate) fn required_units(&self) -> ComponentUnits {
        let border = BORDER_WIDTH_BASE_RATIO * OUTER_BORDER_WIDTH_RATIO * 2.0;
        ComponentUnits::new(
            f32::from(self.width) + border,
            f32::from(self.height) + border,
        )
    }
}

const BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const OUTER_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const LETTER_SIZE_RATIO: f32 = 0.65;
const CLUE_SIZE_RATIO: f32 = 0.28;

fn border_base_width(cell_size: f32) -> f32 {
    f32::max(cell_size * BORDER_WIDTH_BASE_RATIO, 1.0)
}

fn cell_fill_color(cell: &GridCell, palette: &GridPalette) -> Color32 {
    if cell.is_special() {
        return palette.special_fill(cell.special_style.unwrap_or(0));
    }
    if cell.is_selected() {
        return palette.cell_bg_selected;
    }
    if cell.is_in_highlight_set() {
        return palette.cell_bg_word;
    }
    palette.cell_bg_default
}

fn cell_border(cell: &GridCell, palette: &GridPalette, cell_size: f32) -> Stroke {
    let base_width = border_base_width(cell_size);
    if cell.is_selected() {
        Stroke::new(
            base_width * SELECTED_BORDER_WIDTH_RATIO,
            palette.border_selected,
        )
    } else {
        Stroke::new(base_width * THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let grid_theme = GridTheme::from_visuals(visuals);
    let palette = grid_theme.palette_for(visuals);

    let outer_border = border_base_width(cell_size) * OUTER_BORDER_WIDTH_RATIO;
    let size = Vec2::new(
        f32::from(vm.width) * cell_size,
        f32::from(vm.height) * cell_size,
    ) + Vec2::splat(outer_border * 2.0);
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let inner_rect = rect.shrink(outer_border);

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.border_inactive);

    let letter_font = FontId::proportional(cell_size * LETTER_SIZE_RATIO);
    let clue_font = FontId::proportional(cell_size * CLUE_SIZE_RATIO);

    for cell in vm.cells() {
        let (row, col) = (cell.id.index() / vm.width, cell.id.index() % vm.width);

        let cell_min =
            inner_rect.min + Vec2::new(cell_size * f32::from(col), cell_size * f32::from(row));
        let cell_rect = Rect::from_min_size(cell_min, Vec2::splat(cell_size));
        painter.rect_filled(cell_rect, 0.0, cell_fill_color(cell, palette));

        if let Some(number) = cell.clue_number {
            let inset = border_base_width(cell_size) * 2.0;
            painter.text(
                cell_rect.min + Vec2::splat(inset),
                Align2::LEFT_TOP,
                number.to_string(),
                clue_font.clone(),
                palette.text_clue,
            );
        }

        if let Some(letter) = cell.letter {
            painter.text(
                cell_rect.center() + Vec2::new(0.0, cell_size * 0.05),
                Align2::CENTER_CENTER,
                letter.to_string(),
                letter_font.clone(),
                palette.text_letter,
            );
        }

        painter.rect_stroke(
            cell_rect,
            0.0,
            cell_border(cell, palette, cell_size),
            StrokeKind::Inside,
        );

        let response = ui.interact(cell_rect, ui.id().with(cell.id), Sense::click());
        if response.clicked() {
            action_queue.request(SelectionAction::ClickCell(cell.id).into());
        }
    }
}
