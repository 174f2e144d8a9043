use crate::calc::operator::Operator;
use crossterm::event::{KeyCode, KeyEvent};

/// One discrete calculator input, as produced by a keystroke or a pointer
/// click on the keypad. The handler feeds these to the state machine one at
/// a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
    Percent,
}

impl Command {
    /// Keyboard map: `0`-`9` and `.` enter digits, `+ - * /` queue operators
    /// (`*` is ×, `/` is ÷), Enter or `=` evaluates, Esc clears, Backspace
    /// deletes, `%` takes the percentage. Sign toggle has no key; it is a
    /// keypad-only button.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char(c @ '0'..='9') => Some(Self::Digit(c)),
            KeyCode::Char('.') => Some(Self::Decimal),
            KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => {
                Operator::from_key(c).map(Self::Operator)
            }
            KeyCode::Enter | KeyCode::Char('=') => Some(Self::Equals),
            KeyCode::Esc => Some(Self::Clear),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Char('%') => Some(Self::Percent),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keyboard_map() {
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('7'))),
            Some(Command::Digit('7'))
        );
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('.'))),
            Some(Command::Decimal)
        );
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('*'))),
            Some(Command::Operator(Operator::Multiply))
        );
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('/'))),
            Some(Command::Operator(Operator::Divide))
        );
        assert_eq!(Command::from_key(&key(KeyCode::Enter)), Some(Command::Equals));
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('='))),
            Some(Command::Equals)
        );
        assert_eq!(Command::from_key(&key(KeyCode::Esc)), Some(Command::Clear));
        assert_eq!(
            Command::from_key(&key(KeyCode::Backspace)),
            Some(Command::Backspace)
        );
        assert_eq!(
            Command::from_key(&key(KeyCode::Char('%'))),
            Some(Command::Percent)
        );
        assert_eq!(Command::from_key(&key(KeyCode::Char('a'))), None);
        assert_eq!(Command::from_key(&key(KeyCode::Tab)), None);
    }
}
