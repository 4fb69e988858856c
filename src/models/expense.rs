//! Expense breakdown model
//!
//! The expense chart is presentational: a fixed category-to-amount mapping
//! that simulates a month of spending. Amounts are not derived from user
//! input.

use ratatui::style::Color;

use super::money::Money;

/// One slice of the expense breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    /// Category label
    pub label: &'static str,
    /// Amount spent in this category
    pub amount: Money,
    /// Share of the total, in percent
    pub percent: f64,
    /// Display color for the chart and legend
    pub color: Color,
}

/// A fixed set of expense categories with amounts
#[derive(Debug, Clone)]
pub struct ExpenseBreakdown {
    categories: Vec<(&'static str, Money, Color)>,
}

impl ExpenseBreakdown {
    /// The sample breakdown shown on the Expenses screen
    pub fn sample() -> Self {
        Self {
            categories: vec![
                ("Rent", Money::from_dollars_cents(500, 0), Color::Cyan),
                ("Food", Money::from_dollars_cents(200, 0), Color::Yellow),
                ("Transport", Money::from_dollars_cents(100, 0), Color::Green),
                ("Others", Money::from_dollars_cents(150, 0), Color::Magenta),
            ],
        }
    }

    /// Total amount across all categories
    pub fn total(&self) -> Money {
        self.categories.iter().map(|(_, amount, _)| *amount).sum()
    }

    /// The slices with their percentage share of the total
    ///
    /// Returns an empty vector if the total is not positive, so the chart
    /// never divides by zero.
    pub fn slices(&self) -> Vec<ExpenseSlice> {
        let total = self.total().cents();
        if total <= 0 {
            return Vec::new();
        }

        self.categories
            .iter()
            .map(|&(label, amount, color)| ExpenseSlice {
                label,
                amount,
                percent: amount.cents() as f64 * 100.0 / total as f64,
                color,
            })
            .collect()
    }
}

impl Default for ExpenseBreakdown {
    fn default() -> Self {
        Self::sample()
    }
}
