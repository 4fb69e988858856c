//! Income screen
//!
//! A single-field form: enter an income amount, submit for validation.
//! The result appears as a modal dialog rendered by the views module.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::widgets::input::TextInputView;

/// Render the income screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Field label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        Screen::Income.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let label = Paragraph::new(Span::styled(
        "Enter Your Income:",
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(label, chunks[2]);

    // Currency prefix, then the editable field
    let input_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(10)])
        .split(chunks[3]);

    let prefix = Paragraph::new(Span::styled(
        format!("{} ", app.settings.currency_symbol),
        Style::default().fg(Color::Green),
    ));
    frame.render_widget(prefix, input_chunks[0]);
    frame.render_widget(
        TextInputView::new(&app.income_form.input).focused(true),
        input_chunks[1],
    );

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Submit  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}
