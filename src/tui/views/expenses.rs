//! Expenses screen
//!
//! Shows the fixed expense breakdown as a pie chart with a legend. Purely
//! presentational; the only control is Back.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::ExpensesLayout;
use crate::tui::widgets::pie::{PieChart, PieLegend};

/// Render the expenses screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Chart + legend
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        Screen::Expenses.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let slices = app.expenses.slices();
    let chart_layout = ExpensesLayout::new(chunks[1]);
    frame.render_widget(PieChart::new(&slices), chart_layout.chart);
    frame.render_widget(PieLegend::new(&slices), chart_layout.legend);

    let instructions = Line::from(vec![
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[2]);
}
