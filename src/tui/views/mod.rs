//! TUI Views module
//!
//! Contains the per-screen renderers plus the header and status bar. The
//! widget tree is rebuilt from scratch every frame, keyed on the active
//! `Screen` value.

pub mod expenses;
pub mod home;
pub mod income;
pub mod placeholder;
pub mod status_bar;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Dialog, Screen};
use super::layout::AppLayout;
use super::widgets::dialog;

/// Title shown in the window header
const APP_TITLE: &str = "SaveMore - Financial Planner";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);

    // Render the body based on the active screen
    match app.screen {
        Screen::Home => {
            home::render(frame, app, layout.body);
        }
        Screen::Income => {
            income::render(frame, app, layout.body);
        }
        Screen::Expenses => {
            expenses::render(frame, app, layout.body);
        }
        Screen::Budgeting => {
            placeholder::render(
                frame,
                layout.body,
                Screen::Budgeting.title(),
                "Coming Soon: A budget planner tool!",
            );
        }
        Screen::Settings => {
            placeholder::render(
                frame,
                layout.body,
                Screen::Settings.title(),
                "Coming Soon: Settings and customization!",
            );
        }
    }

    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the application header
fn render_header(frame: &mut Frame, area: ratatui::layout::Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Paragraph::new(APP_TITLE)
        .block(block)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(title, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.dialog {
        Dialog::Error(message) => {
            dialog::render_error(frame, message);
        }
        Dialog::Info(message) => {
            dialog::render_info(frame, message);
        }
        Dialog::ConfirmExit => {
            dialog::render_confirm_exit(frame);
        }
        Dialog::None => {}
    }
}
