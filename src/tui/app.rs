//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Exactly one screen is active at a time; switching screens discards the
//! previous screen's transient state wholesale, and each frame rebuilds the
//! widget tree keyed on the `Screen` value.

use crate::assets::IconSet;
use crate::config::Settings;
use crate::models::ExpenseBreakdown;

use super::widgets::input::TextInput;

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Income,
    Expenses,
    Budgeting,
    Settings,
}

impl Screen {
    /// Title shown in the screen header
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "SaveMore",
            Screen::Income => "Income Page",
            Screen::Expenses => "Expenses Page",
            Screen::Budgeting => "Budgeting Page",
            Screen::Settings => "Settings Page",
        }
    }
}

/// An entry in the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Open(Screen),
    Exit,
}

/// The home menu, in display order
pub static HOME_MENU: &[(&str, MenuEntry)] = &[
    ("Income", MenuEntry::Open(Screen::Income)),
    ("Expenses", MenuEntry::Open(Screen::Expenses)),
    ("Budgeting", MenuEntry::Open(Screen::Budgeting)),
    ("Settings", MenuEntry::Open(Screen::Settings)),
    ("Exit", MenuEntry::Exit),
];

/// Currently active modal dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    /// Blocking error dialog with a fixed message
    Error(String),
    /// Success/info dialog
    Info(String),
    /// Yes/no confirmation before exiting
    ConfirmExit,
}

/// State of the income entry form
#[derive(Debug, Clone, Default)]
pub struct IncomeFormState {
    /// The free-text amount field
    pub input: TextInput,
}

impl IncomeFormState {
    /// Reset the form to its initial state
    pub fn reset(&mut self) {
        self.input.clear();
    }
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Discovered icon assets
    pub icons: IconSet,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: Screen,

    /// Currently active dialog
    pub dialog: Dialog,

    /// Selected entry in the home menu
    pub menu_index: usize,

    /// Income form state (only meaningful while the Income screen is shown)
    pub income_form: IncomeFormState,

    /// The fixed expense breakdown shown on the Expenses screen
    pub expenses: ExpenseBreakdown,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: Settings, icons: IconSet) -> Self {
        Self {
            settings,
            icons,
            should_quit: false,
            screen: Screen::default(),
            dialog: Dialog::default(),
            menu_index: 0,
            income_form: IncomeFormState::default(),
            expenses: ExpenseBreakdown::sample(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different screen, discarding the previous screen's
    /// transient state
    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.menu_index = 0;
        self.income_form.reset();
        self.dialog = Dialog::None;
    }

    /// Return to the home screen
    pub fn go_home(&mut self) {
        self.switch_screen(Screen::Home);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.dialog, Dialog::None)
    }

    /// Move selection up in the home menu
    pub fn menu_up(&mut self) {
        if self.menu_index > 0 {
            self.menu_index -= 1;
        }
    }

    /// Move selection down in the home menu
    pub fn menu_down(&mut self) {
        if self.menu_index < HOME_MENU.len() - 1 {
            self.menu_index += 1;
        }
    }
}
