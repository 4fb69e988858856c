//! Pie chart widget
//!
//! Draws a filled pie chart on a braille canvas by sweeping radial lines
//! through each slice's arc, with the percentage printed near the middle of
//! the arc. The legend is a separate widget so layouts can place it freely.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph, Widget,
    },
};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::ExpenseSlice;

/// Radians swept per radial line; small enough that slices render solid
const RAY_STEP: f64 = 0.005;

/// A pie chart over a set of expense slices
pub struct PieChart<'a> {
    slices: &'a [ExpenseSlice],
}

impl<'a> PieChart<'a> {
    /// Create a pie chart for the given slices
    pub fn new(slices: &'a [ExpenseSlice]) -> Self {
        Self { slices }
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slices = self.slices;
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.5, 1.5])
            .y_bounds([-1.5, 1.5])
            .paint(move |ctx| {
                // Start at twelve o'clock and sweep clockwise
                let mut start = FRAC_PI_2;
                for slice in slices {
                    let sweep = slice.percent / 100.0 * TAU;
                    let rays = (sweep / RAY_STEP).ceil().max(1.0) as usize;
                    for i in 0..=rays {
                        let angle = start - sweep * i as f64 / rays as f64;
                        ctx.draw(&CanvasLine {
                            x1: 0.0,
                            y1: 0.0,
                            x2: angle.cos(),
                            y2: angle.sin(),
                            color: slice.color,
                        });
                    }
                    start -= sweep;
                }

                // Percentage labels sit past the rim, along each arc's middle
                let mut start = FRAC_PI_2;
                for slice in slices {
                    let sweep = slice.percent / 100.0 * TAU;
                    let mid = start - sweep / 2.0;
                    ctx.print(
                        1.22 * mid.cos(),
                        1.22 * mid.sin(),
                        Line::styled(format!("{:.1}%", slice.percent), slice.color),
                    );
                    start -= sweep;
                }
            });

        canvas.render(area, buf);
    }
}

/// The legend listing each slice with its amount and percentage
pub struct PieLegend<'a> {
    slices: &'a [ExpenseSlice],
}

impl<'a> PieLegend<'a> {
    /// Create a legend for the given slices
    pub fn new(slices: &'a [ExpenseSlice]) -> Self {
        Self { slices }
    }
}

impl Widget for PieLegend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.slices.len());
        for slice in self.slices {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice.color)),
                Span::styled(
                    format!("{:<10}", slice.label),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>9}", slice.amount.to_string()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("  {:>5.1}%", slice.percent),
                    Style::default().fg(slice.color),
                ),
            ]));
        }

        let block = Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseBreakdown;

    #[test]
    fn test_pie_chart_renders_without_panicking() {
        let breakdown = ExpenseBreakdown::sample();
        let slices = breakdown.slices();
        let area = Rect::new(0, 0, 44, 20);
        let mut buf = Buffer::empty(area);

        PieChart::new(&slices).render(area, &mut buf);

        // Something must have been painted inside the chart area
        let painted = buf.content.iter().any(|cell| cell.symbol() != " ");
        assert!(painted);
    }

    #[test]
    fn test_legend_shows_every_category_and_percent() {
        let breakdown = ExpenseBreakdown::sample();
        let slices = breakdown.slices();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);

        PieLegend::new(&slices).render(area, &mut buf);

        let rendered: String = buf.content.iter().map(|cell| cell.symbol()).collect();
        for label in ["Rent", "Food", "Transport", "Others"] {
            assert!(rendered.contains(label), "missing label {}", label);
        }
        for percent in ["52.6%", "21.1%", "10.5%", "15.8%"] {
            assert!(rendered.contains(percent), "missing percent {}", percent);
        }
    }

    #[test]
    fn test_empty_slices_render_nothing() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        PieChart::new(&[]).render(area, &mut buf);

        let painted = buf.content.iter().any(|cell| cell.symbol() != " ");
        assert!(!painted);
    }
}
