//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, screen body, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Header area (application title)
    pub header: Rect,
    /// Screen body
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the expenses screen: chart on the left, legend on the right
pub struct ExpensesLayout {
    /// Pie chart area
    pub chart: Rect,
    /// Legend area
    pub legend: Rect,
}

impl ExpensesLayout {
    /// Calculate expenses screen layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Chart (roughly square in cells)
                Constraint::Min(24),    // Legend
            ])
            .split(area);

        Self {
            chart: chunks[0],
            legend: chunks[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
