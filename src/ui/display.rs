use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" crabcalc ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;

    // Expression preview: the pending left operand and operator, or blank.
    let preview = state.calc.expression_preview().unwrap_or_default();
    let preview_line = Line::from(Span::styled(
        right_align(&preview, width),
        Theme::expression_preview(),
    ));

    let value = state.calc.display();
    let value_style = if state.calc.is_error() {
        Theme::display_error()
    } else {
        Theme::display_value()
    };
    let value_line = Line::from(Span::styled(right_align(value, width), value_style));

    let paragraph = Paragraph::new(vec![preview_line, value_line]);
    frame.render_widget(paragraph, inner);
}

fn right_align(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}
