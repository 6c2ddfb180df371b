//! Input widgets: text fields and the percentage slider

use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::messages;
use crate::models::MAX_PERCENT;
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY};

/// Bordered panel; the border lights up when focused
fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let title_color = if focused { CYAN_PRIMARY } else { TEXT_MUTED };

    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(title_color)))
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY))
}

/// Render a single-line text field and place the cursor when focused
pub fn render_text_field(area: Rect, title: &str, text: &str, focused: bool, frame: &mut Frame) {
    let block = field_block(title, focused);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(TEXT_PRIMARY),
    )))
    .block(block);
    frame.render_widget(paragraph, area);

    if focused && inner.width > 0 {
        // Keep the cursor inside the field even when the text overflows
        let offset = (text.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

/// Render the tip percentage slider with its live label
pub fn render_percent_slider(area: Rect, percent: u8, focused: bool, frame: &mut Frame) {
    let block = field_block("Tip percent (\u{2190}/\u{2192})", focused);
    let ratio = f64::from(percent.min(MAX_PERCENT)) / f64::from(MAX_PERCENT);

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(CYAN_PRIMARY).bg(BG_SECONDARY))
        .ratio(ratio)
        .label(Span::styled(
            messages::tip_percent_label(percent),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}
