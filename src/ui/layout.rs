use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const KEYPAD_COLS: u16 = 4;
pub const KEYPAD_ROWS: u16 = 5;
pub const KEY_WIDTH: u16 = 7;
pub const KEY_HEIGHT: u16 = 3;

const CALC_WIDTH: u16 = KEYPAD_COLS * KEY_WIDTH;
const DISPLAY_HEIGHT: u16 = 4;
const KEYPAD_HEIGHT: u16 = KEYPAD_ROWS * KEY_HEIGHT;

pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status_bar: Rect,
}

/// Centers the calculator column in the terminal: display window above the
/// keypad grid, one status line along the bottom edge.
pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Center the fixed-width calculator column horizontally
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CALC_WIDTH),
            Constraint::Min(0),
        ])
        .split(content);

    let column = h_chunks[1];

    // And vertically within the column
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(KEYPAD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(column);

    AppLayout {
        display: v_chunks[1],
        keypad: v_chunks[2],
        status_bar,
    }
}
