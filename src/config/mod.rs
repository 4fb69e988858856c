//! Configuration module for SaveMore
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::SaveMorePaths;
pub use settings::Settings;
