mod display;
mod status_bar;
mod theme;

pub mod keypad;
pub mod layout;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    display::render(frame, app_layout.display, state);
    keypad::render(frame, app_layout.keypad, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
