//! Full-screen rendering of the calculator

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, ResultPanel};
use crate::models::Field;
use crate::theme::{
    AMBER_WARNING, BG_PRIMARY, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY,
};

use super::fields::{render_percent_slider, render_text_field};

/// Key hints shown in the bottom bar
const KEY_HINTS: &str = " Enter: Calculate | Tab: Next field | \u{2190}/\u{2192}: Tip % | F1: About | Esc: Quit ";

/// Draw the whole screen for the current state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Bill total
            Constraint::Length(3), // Split
            Constraint::Length(3), // Tip percent slider
            Constraint::Min(4),    // Result panel
            Constraint::Length(1), // Toast
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " tipcalc ",
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("tip & split", Style::default().fg(TEXT_MUTED)),
    ]));
    frame.render_widget(title, layout[0]);

    render_text_field(
        layout[1],
        "Bill total",
        &app.bill_text,
        app.focus == Field::Bill,
        frame,
    );
    render_text_field(
        layout[2],
        "Split between",
        &app.split_text,
        app.focus == Field::Split,
        frame,
    );
    render_percent_slider(layout[3], app.percent, app.focus == Field::Percent, frame);

    render_result(layout[4], app, frame);

    if let Some(toast) = &app.toast {
        let toast_line = Paragraph::new(Span::styled(
            format!(" {} ", toast.message),
            Style::default()
                .fg(AMBER_WARNING)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(toast_line, layout[5]);
    }

    let keybindings =
        Paragraph::new(KEY_HINTS).style(Style::default().fg(BG_PRIMARY).bg(CYAN_PRIMARY));
    frame.render_widget(keybindings, layout[6]);
}

/// Result panel: green while it shows a successful calculation
fn render_result(area: Rect, app: &App, frame: &mut Frame) {
    let text_color = if app.result_panel == ResultPanel::Result {
        GREEN_SUCCESS
    } else {
        TEXT_PRIMARY
    };

    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_type(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let paragraph = Paragraph::new(app.result_text.as_str())
        .style(Style::default().fg(text_color))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
