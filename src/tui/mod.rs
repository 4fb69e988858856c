//! Terminal User Interface module
//!
//! This module provides the interactive interface for SaveMore using ratatui.
//! One screen is visible at a time; the home screen is the only navigation
//! hub. All state changes flow through the command dispatcher in `commands`,
//! which keeps the screen logic testable without a live terminal.

pub mod app;
pub mod commands;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
