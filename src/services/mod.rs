//! Business logic layer for SaveMore

pub mod income;

pub use income::{validate_income, IncomeError};
