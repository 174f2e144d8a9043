use crate::app::command::Command;
use crate::calc::evaluator::Calculator;
use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;

/// How many ticks a keypad button stays highlighted after a press
/// (ticks arrive every 50ms).
const PRESS_HIGHLIGHT_TICKS: u8 = 3;

/// A resolved calculation, drained by the main loop into the result log.
#[derive(Debug, Clone)]
pub struct CalcEntry {
    pub timestamp: String,
    pub expression: String,
    pub result: String,
}

pub struct AppState {
    pub config: AppConfig,
    pub calc: Calculator,
    /// Last known terminal size, for keypad hit-testing on mouse clicks.
    pub viewport: Rect,
    pub pressed: Option<(Command, u8)>,
    pub new_entries: Vec<CalcEntry>,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            calc: Calculator::new(),
            viewport: Rect::default(),
            pressed: None,
            new_entries: Vec::new(),
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    /// Lights up the keypad button bound to `command` for a few ticks, so
    /// keyboard input gives the same visual feedback as a click.
    pub fn press_highlight(&mut self, command: Command) {
        self.pressed = Some((command, PRESS_HIGHLIGHT_TICKS));
        self.dirty = true;
    }

    pub fn is_pressed(&self, command: Command) -> bool {
        matches!(self.pressed, Some((c, _)) if c == command)
    }

    /// Counts the pressed highlight down one tick. Returns true when the
    /// highlight just expired and the keypad needs a redraw.
    pub fn decay_pressed(&mut self) -> bool {
        if let Some((_, ticks)) = &mut self.pressed {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.pressed = None;
                return true;
            }
        }
        false
    }

    pub fn record_entry(&mut self, expression: String, result: String) {
        self.new_entries.push(CalcEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            expression,
            result,
        });
    }

    pub fn status_line(&self) -> String {
        if self.calc.is_error() {
            "division by zero: press AC or any digit".to_string()
        } else if self.calc.expression_preview().is_some() {
            "operation pending".to_string()
        } else {
            "ready".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_highlight_decays() {
        let mut state = AppState::new(AppConfig::default());
        state.press_highlight(Command::Equals);
        assert!(state.is_pressed(Command::Equals));
        assert!(!state.is_pressed(Command::Clear));

        let mut expired = false;
        for _ in 0..PRESS_HIGHLIGHT_TICKS {
            expired = state.decay_pressed();
        }
        assert!(expired);
        assert!(!state.is_pressed(Command::Equals));
        assert!(!state.decay_pressed());
    }
}
