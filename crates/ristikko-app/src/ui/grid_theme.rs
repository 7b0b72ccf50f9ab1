use eframe::egui::{Color32, Visuals};

/// Number of distinct shades used for blocked cells.
const SPECIAL_SHADES: u8 = 13;

/// Color palette for crossword grid rendering.
///
/// Kept apart from `egui::Visuals` so grid semantics (selection, word highlight,
/// blocked cell shading) can be tuned without touching the global UI theme.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_selected: Color32,
    pub cell_bg_word: Color32,

    pub special_bg_first: Color32,
    pub special_bg_last: Color32,

    pub border_inactive: Color32,
    pub border_selected: Color32,

    pub text_letter: Color32,
    pub text_clue: Color32,
}

impl GridPalette {
    /// Initialize the palette using the current visuals.
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let (special_bg_first, special_bg_last) = if visuals.dark_mode {
            (Color32::from_gray(10), Color32::from_gray(70))
        } else {
            (Color32::from_gray(25), Color32::from_gray(110))
        };

        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected: visuals.selection.bg_fill,
            cell_bg_word: visuals.widgets.hovered.bg_fill,

            special_bg_first,
            special_bg_last,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_letter: visuals.strong_text_color(),
            text_clue: visuals.weak_text_color(),
        }
    }

    /// Fill color for a blocked cell with the given style variant.
    #[must_use]
    pub fn special_fill(&self, style: u8) -> Color32 {
        let t = f32::from(style.min(SPECIAL_SHADES)) / f32::from(SPECIAL_SHADES);
        self.special_bg_first.lerp_to_gamma(self.special_bg_last, t)
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub struct GridTheme {
    pub light: GridPalette,
    pub dark: GridPalette,
}

impl GridTheme {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let palette = GridPalette::from_visuals(visuals);
        Self {
            light: palette.clone(),
            dark: palette,
        }
    }

    pub fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
