//! SaveMore - Terminal-based personal finance tracker
//!
//! SaveMore helps people save and manage their money from the terminal.
//! It provides a home menu, an income entry form with validation, an
//! expense breakdown pie chart, and placeholder screens for upcoming
//! budgeting and settings features.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money amounts, expense breakdown)
//! - `services`: Input validation logic
//! - `assets`: Icon asset discovery
//! - `tui`: The interactive terminal interface

pub mod assets;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::SaveMoreError;
