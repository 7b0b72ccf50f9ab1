pub(crate) use self::{app_state::*, settings::*, ui_state::*, zoom::*};

mod app_state;
mod settings;
mod ui_state;
mod zoom;
