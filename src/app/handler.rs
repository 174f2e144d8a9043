use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::{keypad, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.decay_pressed() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Char('q') {
        return vec![Action::Quit];
    }

    if let Some(command) = Command::from_key(&key) {
        apply_command(state, command);
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let app_layout = layout::compute_layout(state.viewport);
        if let Some(command) = keypad::command_at(app_layout.keypad, mouse.column, mouse.row) {
            apply_command(state, command);
        }
    }
    vec![]
}

/// Feeds one command to the state machine and swaps in the successor state.
/// When the command resolved a pending operation, the full expression and
/// its result are recorded for the result log.
pub fn apply_command(state: &mut AppState, command: Command) {
    state.press_highlight(command);

    let before = &state.calc;
    let after = match command {
        Command::Digit(d) => before.input_digit(d),
        Command::Decimal => before.input_decimal(),
        Command::Operator(op) => before.operator_pressed(op),
        Command::Equals => before.equals(),
        Command::Clear => before.clear_all(),
        Command::Backspace => before.backspace(),
        Command::ToggleSign => before.toggle_sign(),
        Command::Percent => before.percentage(),
    };

    if matches!(command, Command::Equals | Command::Operator(_)) {
        if let Some(preview) = before.expression_preview() {
            let expression = format!("{} {}", preview, before.display());
            state.record_entry(expression, after.display().to_string());
        }
    }

    tracing::debug!(?command, display = after.display(), "command applied");
    state.calc = after;
    state.dirty = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluator::Calculator;
    use crate::config::AppConfig;

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_keystrokes_drive_the_machine() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('5'));
        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.calc.display(), "8");
    }

    #[test]
    fn test_escape_clears() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('9'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.calc.display(), "0");
    }

    #[test]
    fn test_resolved_operations_are_recorded() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('6'));
        press(&mut state, KeyCode::Char('*'));
        press(&mut state, KeyCode::Char('7'));
        assert!(state.new_entries.is_empty());

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.new_entries.len(), 1);
        assert_eq!(state.new_entries[0].expression, "6 × 7");
        assert_eq!(state.new_entries[0].result, "42");
    }

    #[test]
    fn test_operator_chaining_records_intermediate_result() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('5'));
        press(&mut state, KeyCode::Char('+'));
        press(&mut state, KeyCode::Char('3'));
        press(&mut state, KeyCode::Char('*'));
        assert_eq!(state.new_entries.len(), 1);
        assert_eq!(state.new_entries[0].expression, "5 + 3");
        assert_eq!(state.new_entries[0].result, "8");
        assert_eq!(state.calc.display(), "8");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = AppState::new(AppConfig::default());
        let actions = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('z'));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.calc, Calculator::new());
    }
}
