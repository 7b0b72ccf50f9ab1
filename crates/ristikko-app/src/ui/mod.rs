pub(crate) mod game_screen;
pub(crate) mod grid;
pub(crate) mod grid_theme;
pub(crate) mod input;
pub(crate) mod keyboard;
pub(crate) mod layout;
pub(crate) mod modal;
pub(crate) mod sidebar;
pub(crate) mod text_field;
pub(crate) mod toolbar;
