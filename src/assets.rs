//! Icon asset discovery
//!
//! SaveMore ships with two icon images, `money.png` and `receipt.png`,
//! shown as markers on the home screen. Each is looked up in the configured
//! assets directory first and then in the current working directory. A
//! missing file no longer aborts startup; the app degrades to text-only
//! markers and reports which files were not found.

use std::path::{Path, PathBuf};

use crate::config::SaveMorePaths;
use crate::error::SaveMoreError;

/// File name of the income icon
pub const INCOME_ICON: &str = "money.png";
/// File name of the expense icon
pub const EXPENSE_ICON: &str = "receipt.png";

/// Resolved icon assets
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    /// Path to the income icon, if found
    pub income: Option<PathBuf>,
    /// Path to the expense icon, if found
    pub expense: Option<PathBuf>,
}

impl IconSet {
    /// Discover icons in the assets directory, falling back to the
    /// current working directory
    pub fn discover(paths: &SaveMorePaths) -> Self {
        Self {
            income: find_asset(&paths.assets_dir(), INCOME_ICON),
            expense: find_asset(&paths.assets_dir(), EXPENSE_ICON),
        }
    }

    /// Whether both icons were found
    pub fn is_complete(&self) -> bool {
        self.income.is_some() && self.expense.is_some()
    }

    /// Names of the icon files that were not found
    pub fn missing(&self) -> Vec<String> {
        let mut missing = Vec::new();
        if self.income.is_none() {
            missing.push(INCOME_ICON.to_string());
        }
        if self.expense.is_none() {
            missing.push(EXPENSE_ICON.to_string());
        }
        missing
    }

    /// Require both icons, producing an error naming the missing files
    pub fn require_complete(&self) -> Result<(), SaveMoreError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SaveMoreError::Asset { missing })
        }
    }
}

/// Look for an asset file in the assets directory, then the working directory
fn find_asset(assets_dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = assets_dir.join(name);
    if candidate.is_file() {
        return Some(candidate);
    }

    let cwd_candidate = PathBuf::from(name);
    if cwd_candidate.is_file() {
        return Some(cwd_candidate);
    }

    None
}
