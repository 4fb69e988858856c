//! Home screen
//!
//! The navigation hub: title, subtitle, and the menu of screens. Icon
//! markers appear beside the Income and Expenses entries when the
//! corresponding asset file was found.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, MenuEntry, Screen, HOME_MENU};

/// Render the home screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),                    // Title
            Constraint::Length(1),                    // Subtitle
            Constraint::Length(1),                    // Spacer
            Constraint::Length(HOME_MENU.len() as u16 * 2), // Menu
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        Screen::Home.title(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(Span::styled(
        "Your personal finance tracker",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[1]);

    // One line per entry, with a blank line between them
    let mut lines = Vec::with_capacity(HOME_MENU.len() * 2);
    for (i, (label, entry)) in HOME_MENU.iter().enumerate() {
        let selected = i == app.menu_index;
        let marker = if selected { "> " } else { "  " };
        let icon = entry_icon(app, *entry);

        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::raw(icon),
            Span::styled(*label, style),
        ]));
        lines.push(Line::from(""));
    }

    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[3]);
}

/// Icon marker for a menu entry, if its asset was found
fn entry_icon(app: &App, entry: MenuEntry) -> &'static str {
    if !app.settings.show_icons {
        return "";
    }

    match entry {
        MenuEntry::Open(Screen::Income) if app.icons.income.is_some() => "💰 ",
        MenuEntry::Open(Screen::Expenses) if app.icons.expense.is_some() => "🧾 ",
        _ => "",
    }
}
