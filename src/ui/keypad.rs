use crate::app::command::Command;
use crate::app::state::AppState;
use crate::calc::operator::Operator;
use crate::ui::layout::{KEYPAD_COLS, KEYPAD_ROWS, KEY_HEIGHT, KEY_WIDTH};
use crate::ui::theme::Theme;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Number,
    Operator,
    Function,
    Equals,
}

pub struct Key {
    pub label: &'static str,
    pub command: Command,
    pub kind: KeyKind,
}

const fn key(label: &'static str, command: Command, kind: KeyKind) -> Key {
    Key {
        label,
        command,
        kind,
    }
}

/// The keypad grid, row-major from the top left.
pub const KEYS: [[Key; KEYPAD_COLS as usize]; KEYPAD_ROWS as usize] = [
    [
        key("AC", Command::Clear, KeyKind::Function),
        key("±", Command::ToggleSign, KeyKind::Function),
        key("%", Command::Percent, KeyKind::Function),
        key("÷", Command::Operator(Operator::Divide), KeyKind::Operator),
    ],
    [
        key("7", Command::Digit('7'), KeyKind::Number),
        key("8", Command::Digit('8'), KeyKind::Number),
        key("9", Command::Digit('9'), KeyKind::Number),
        key("×", Command::Operator(Operator::Multiply), KeyKind::Operator),
    ],
    [
        key("4", Command::Digit('4'), KeyKind::Number),
        key("5", Command::Digit('5'), KeyKind::Number),
        key("6", Command::Digit('6'), KeyKind::Number),
        key("−", Command::Operator(Operator::Subtract), KeyKind::Operator),
    ],
    [
        key("1", Command::Digit('1'), KeyKind::Number),
        key("2", Command::Digit('2'), KeyKind::Number),
        key("3", Command::Digit('3'), KeyKind::Number),
        key("+", Command::Operator(Operator::Add), KeyKind::Operator),
    ],
    [
        key("0", Command::Digit('0'), KeyKind::Number),
        key("⌫", Command::Backspace, KeyKind::Function),
        key(".", Command::Decimal, KeyKind::Number),
        key("=", Command::Equals, KeyKind::Equals),
    ],
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    for (row_idx, row) in KEYS.iter().enumerate() {
        for (col_idx, k) in row.iter().enumerate() {
            let rect = key_rect(area, row_idx as u16, col_idx as u16);
            if rect.right() > area.right() || rect.bottom() > area.bottom() {
                continue;
            }

            let label_style = if state.is_pressed(k.command) {
                Theme::button_pressed()
            } else {
                match k.kind {
                    KeyKind::Number => Theme::button_number(),
                    KeyKind::Operator => Theme::button_operator(),
                    KeyKind::Function => Theme::button_function(),
                    KeyKind::Equals => Theme::button_equals(),
                }
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border());
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            let label = Paragraph::new(k.label)
                .style(label_style)
                .alignment(Alignment::Center);
            frame.render_widget(label, inner);
        }
    }
}

fn key_rect(area: Rect, row: u16, col: u16) -> Rect {
    Rect::new(
        area.x + col * KEY_WIDTH,
        area.y + row * KEY_HEIGHT,
        KEY_WIDTH,
        KEY_HEIGHT,
    )
}

/// Hit-tests a pointer position against the keypad grid.
pub fn command_at(area: Rect, x: u16, y: u16) -> Option<Command> {
    if !area.contains(Position::new(x, y)) {
        return None;
    }
    let col = (x - area.x) / KEY_WIDTH;
    let row = (y - area.y) / KEY_HEIGHT;
    if col >= KEYPAD_COLS || row >= KEYPAD_ROWS {
        return None;
    }
    Some(KEYS[row as usize][col as usize].command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad_area() -> Rect {
        Rect::new(10, 5, KEYPAD_COLS * KEY_WIDTH, KEYPAD_ROWS * KEY_HEIGHT)
    }

    #[test]
    fn test_hit_test_corners() {
        let area = keypad_area();
        assert_eq!(command_at(area, area.x, area.y), Some(Command::Clear));
        assert_eq!(
            command_at(area, area.right() - 1, area.bottom() - 1),
            Some(Command::Equals)
        );
    }

    #[test]
    fn test_hit_test_interior_cell() {
        let area = keypad_area();
        // Center of the "5" button: row 2, column 1
        let x = area.x + KEY_WIDTH + KEY_WIDTH / 2;
        let y = area.y + 2 * KEY_HEIGHT + KEY_HEIGHT / 2;
        assert_eq!(command_at(area, x, y), Some(Command::Digit('5')));
    }

    #[test]
    fn test_hit_test_outside_keypad() {
        let area = keypad_area();
        assert_eq!(command_at(area, area.x.wrapping_sub(1), area.y), None);
        assert_eq!(command_at(area, area.x, area.bottom()), None);
    }

    #[test]
    fn test_grid_covers_every_command_once() {
        let commands: Vec<Command> = KEYS.iter().flatten().map(|k| k.command).collect();
        assert_eq!(commands.len(), 20);
        for (i, command) in commands.iter().enumerate() {
            assert!(!commands[i + 1..].contains(command), "{:?} repeats", command);
        }
        assert!(KEYS.iter().flatten().any(|k| k.command == Command::Decimal));
        assert!(KEYS
            .iter()
            .flatten()
            .any(|k| k.command == Command::ToggleSign));
    }
}
