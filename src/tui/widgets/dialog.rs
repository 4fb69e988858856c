//! Modal dialogs
//!
//! Blocking error, success, and exit-confirmation dialogs. The message
//! strings rendered here are part of the user-visible contract.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Prompt shown by the exit confirmation dialog
pub const EXIT_PROMPT: &str = "Are you sure you want to exit?";

/// Render a blocking error dialog
pub fn render_error(frame: &mut Frame, message: &str) {
    render_message(frame, " Error ", message, Color::Red, "Press Esc or Enter to close");
}

/// Render a success/info dialog
pub fn render_info(frame: &mut Frame, message: &str) {
    render_message(frame, " Success ", message, Color::Green, "Press Esc or Enter to close");
}

fn render_message(frame: &mut Frame, title: &str, message: &str, accent: Color, hint: &str) {
    let width = (message.len() as u16 + 6).clamp(30, 60);
    let area = centered_rect_fixed(width, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Render the exit confirmation dialog
pub fn render_confirm_exit(frame: &mut Frame) {
    let area = centered_rect_fixed(50, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Exit ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(EXIT_PROMPT, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
