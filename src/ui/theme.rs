use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_value() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn display_error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn expression_preview() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button_number() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_operator() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn button_function() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn button_equals() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn button_pressed() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    }
}
