//! Core data models for SaveMore

pub mod expense;
pub mod money;

pub use expense::{ExpenseBreakdown, ExpenseSlice};
pub use money::Money;
