//! Command definitions and the central dispatcher
//!
//! Every state change in the TUI is expressed as a `Command` value and
//! routed through `dispatch`. The key handler only translates key events
//! into commands, so all screen logic can be exercised in tests without a
//! live terminal.

use crate::services::validate_income;

use super::app::{App, Dialog, MenuEntry, Screen, HOME_MENU};

/// An action the user can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Navigation
    /// Open a screen from the home menu
    Navigate(Screen),
    /// Return to the home screen
    Back,

    // Home menu
    MenuUp,
    MenuDown,
    /// Activate the selected menu entry
    MenuSelect,

    // Income form editing
    Insert(char),
    Backspace,
    CursorLeft,
    CursorRight,
    ClearField,
    /// Submit the income field for validation
    Submit,

    // Dialogs and exit
    /// Ask to exit (opens the confirmation dialog if enabled)
    RequestExit,
    /// Answer "yes" to the exit confirmation
    ConfirmYes,
    /// Answer "no" to the exit confirmation
    ConfirmNo,
    /// Dismiss an error or info dialog
    Dismiss,
}

/// Apply a command to the application state
pub fn dispatch(app: &mut App, command: Command) {
    match command {
        Command::Navigate(screen) => {
            if app.screen == Screen::Home && !app.has_dialog() {
                app.switch_screen(screen);
            }
        }
        Command::Back => {
            if !app.has_dialog() {
                app.go_home();
            }
        }

        Command::MenuUp => app.menu_up(),
        Command::MenuDown => app.menu_down(),
        Command::MenuSelect => {
            if app.screen == Screen::Home && !app.has_dialog() {
                match HOME_MENU[app.menu_index].1 {
                    MenuEntry::Open(screen) => app.switch_screen(screen),
                    MenuEntry::Exit => request_exit(app),
                }
            }
        }

        Command::Insert(c) => {
            if app.screen == Screen::Income && !app.has_dialog() {
                app.income_form.input.insert(c);
            }
        }
        Command::Backspace => app.income_form.input.backspace(),
        Command::CursorLeft => app.income_form.input.move_left(),
        Command::CursorRight => app.income_form.input.move_right(),
        Command::ClearField => app.income_form.input.clear(),
        Command::Submit => submit_income(app),

        Command::RequestExit => request_exit(app),
        Command::ConfirmYes => {
            if app.dialog == Dialog::ConfirmExit {
                app.quit();
            }
        }
        Command::ConfirmNo => {
            if app.dialog == Dialog::ConfirmExit {
                app.close_dialog();
            }
        }
        Command::Dismiss => {
            if matches!(app.dialog, Dialog::Error(_) | Dialog::Info(_)) {
                app.close_dialog();
            }
        }
    }
}

/// Ask to exit, honoring the confirm_exit setting
fn request_exit(app: &mut App) {
    if app.settings.confirm_exit {
        app.open_dialog(Dialog::ConfirmExit);
    } else {
        app.quit();
    }
}

/// Validate the income field and surface the result as a modal dialog
fn submit_income(app: &mut App) {
    if app.screen != Screen::Income || app.has_dialog() {
        return;
    }

    match validate_income(app.income_form.input.value()) {
        Ok(amount) => {
            let formatted = amount.format_with_symbol(&app.settings.currency_symbol);
            app.open_dialog(Dialog::Info(format!(
                "Income Recorded Successfully: {}",
                formatted
            )));
            app.income_form.reset();
        }
        Err(e) => {
            // Keep the entered text so the user can correct it
            app.open_dialog(Dialog::Error(e.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::IconSet;
    use crate::config::Settings;

    fn app() -> App {
        App::new(Settings::default(), IconSet::default())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            dispatch(app, Command::Insert(c));
        }
    }

    #[test]
    fn test_home_navigates_to_every_screen() {
        for screen in [
            Screen::Income,
            Screen::Expenses,
            Screen::Budgeting,
            Screen::Settings,
        ] {
            let mut app = app();
            dispatch(&mut app, Command::Navigate(screen));
            assert_eq!(app.screen, screen);
        }
    }

    #[test]
    fn test_back_returns_to_home_from_every_screen() {
        for screen in [
            Screen::Income,
            Screen::Expenses,
            Screen::Budgeting,
            Screen::Settings,
        ] {
            let mut app = app();
            dispatch(&mut app, Command::Navigate(screen));
            dispatch(&mut app, Command::Back);
            assert_eq!(app.screen, Screen::Home);
            assert_eq!(app.menu_index, 0);
            assert_eq!(app.income_form.input.value(), "");
        }
    }

    #[test]
    fn test_navigate_only_from_home() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Expenses));
        dispatch(&mut app, Command::Navigate(Screen::Income));
        // Still on Expenses: screens are only reachable via Home
        assert_eq!(app.screen, Screen::Expenses);
    }

    #[test]
    fn test_menu_select_opens_screen() {
        let mut app = app();
        dispatch(&mut app, Command::MenuDown);
        dispatch(&mut app, Command::MenuSelect);
        assert_eq!(app.screen, Screen::Expenses);
    }

    #[test]
    fn test_menu_select_exit_asks_for_confirmation() {
        let mut app = app();
        for _ in 0..HOME_MENU.len() {
            dispatch(&mut app, Command::MenuDown);
        }
        dispatch(&mut app, Command::MenuSelect);
        assert_eq!(app.dialog, Dialog::ConfirmExit);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_exit_confirmed() {
        let mut app = app();
        dispatch(&mut app, Command::RequestExit);
        dispatch(&mut app, Command::ConfirmYes);
        assert!(app.should_quit);
    }

    #[test]
    fn test_exit_declined_leaves_state_unchanged() {
        let mut app = app();
        dispatch(&mut app, Command::RequestExit);
        dispatch(&mut app, Command::ConfirmNo);
        assert!(!app.should_quit);
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.dialog, Dialog::None);
    }

    #[test]
    fn test_exit_without_confirmation_setting() {
        let mut settings = Settings::default();
        settings.confirm_exit = false;
        let mut app = App::new(settings, IconSet::default());

        dispatch(&mut app, Command::RequestExit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_submit_valid_income_shows_success_dialog() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        type_str(&mut app, "1234.5");
        dispatch(&mut app, Command::Submit);

        assert_eq!(
            app.dialog,
            Dialog::Info("Income Recorded Successfully: $1,234.50".into())
        );
        // The transient amount is not stored anywhere
        assert_eq!(app.income_form.input.value(), "");
    }

    #[test]
    fn test_submit_empty_income_shows_error() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        dispatch(&mut app, Command::Submit);

        assert_eq!(
            app.dialog,
            Dialog::Error("Income field cannot be empty!".into())
        );
    }

    #[test]
    fn test_submit_non_numeric_income_shows_error() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        type_str(&mut app, "abc");
        dispatch(&mut app, Command::Submit);

        assert_eq!(
            app.dialog,
            Dialog::Error("Invalid input! Please enter a valid numeric amount.".into())
        );
        // Entered text is kept for correction
        assert_eq!(app.income_form.input.value(), "abc");
    }

    #[test]
    fn test_submit_negative_income_shows_error() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        type_str(&mut app, "-5");
        dispatch(&mut app, Command::Submit);

        assert_eq!(app.dialog, Dialog::Error("Income cannot be negative.".into()));
    }

    #[test]
    fn test_dismiss_closes_error_dialog() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        dispatch(&mut app, Command::Submit);
        assert!(app.has_dialog());

        dispatch(&mut app, Command::Dismiss);
        assert_eq!(app.dialog, Dialog::None);
        assert_eq!(app.screen, Screen::Income);
    }

    #[test]
    fn test_dialog_blocks_navigation() {
        let mut app = app();
        dispatch(&mut app, Command::RequestExit);
        dispatch(&mut app, Command::Navigate(Screen::Income));
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.dialog, Dialog::ConfirmExit);
    }

    #[test]
    fn test_dismiss_does_not_close_confirm_dialog() {
        let mut app = app();
        dispatch(&mut app, Command::RequestExit);
        dispatch(&mut app, Command::Dismiss);
        assert_eq!(app.dialog, Dialog::ConfirmExit);
    }

    #[test]
    fn test_field_editing() {
        let mut app = app();
        dispatch(&mut app, Command::Navigate(Screen::Income));
        type_str(&mut app, "125");
        dispatch(&mut app, Command::CursorLeft);
        dispatch(&mut app, Command::Backspace);
        assert_eq!(app.income_form.input.value(), "15");

        dispatch(&mut app, Command::ClearField);
        assert_eq!(app.income_form.input.value(), "");
    }
}
