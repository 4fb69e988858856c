//! Reusable TUI widgets

pub mod dialog;
pub mod input;
pub mod pie;
