//! Event handler for the TUI
//!
//! Translates keyboard events into `Command` values based on the current
//! application state, then routes them through the dispatcher. Dialogs take
//! priority over the active screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Dialog, Screen};
use super::commands::{dispatch, Command};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    if let Event::Key(key) = event {
        if let Some(command) = key_to_command(app, key) {
            dispatch(app, command);
        }
    }
    // Resize and Tick need no state changes; the next draw picks them up
    Ok(())
}

/// Translate a key event into a command for the current state
pub fn key_to_command(app: &App, key: KeyEvent) -> Option<Command> {
    if app.has_dialog() {
        return dialog_key(app, key);
    }

    match app.screen {
        Screen::Home => home_key(key),
        Screen::Income => income_key(key),
        Screen::Expenses | Screen::Budgeting | Screen::Settings => back_key(key),
    }
}

/// Keys while a dialog is open
fn dialog_key(app: &App, key: KeyEvent) -> Option<Command> {
    match app.dialog {
        Dialog::ConfirmExit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Command::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Command::ConfirmNo),
            _ => None,
        },
        Dialog::Error(_) | Dialog::Info(_) => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Command::Dismiss),
            _ => None,
        },
        Dialog::None => None,
    }
}

/// Keys on the home screen
fn home_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MenuDown),
        KeyCode::Enter => Some(Command::MenuSelect),

        // Direct hotkeys for the four screens
        KeyCode::Char('1') => Some(Command::Navigate(Screen::Income)),
        KeyCode::Char('2') => Some(Command::Navigate(Screen::Expenses)),
        KeyCode::Char('3') => Some(Command::Navigate(Screen::Budgeting)),
        KeyCode::Char('4') => Some(Command::Navigate(Screen::Settings)),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::RequestExit),
        _ => None,
    }
}

/// Keys on the income screen; printable characters go into the field
fn income_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc => Some(Command::Back),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Left => Some(Command::CursorLeft),
        KeyCode::Right => Some(Command::CursorRight),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::ClearField)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Insert(c))
        }
        _ => None,
    }
}

/// Keys on screens whose only control is Back
fn back_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Backspace => {
            Some(Command::Back)
        }
        _ => None,
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

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_keys() {
        let app = app();
        assert_eq!(key_to_command(&app, key(KeyCode::Down)), Some(Command::MenuDown));
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('1'))),
            Some(Command::Navigate(Screen::Income))
        );
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('q'))),
            Some(Command::RequestExit)
        );
    }

    #[test]
    fn test_income_typing_goes_to_field() {
        let mut app = app();
        app.switch_screen(Screen::Income);
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('5'))),
            Some(Command::Insert('5'))
        );
        // 'q' types into the field instead of quitting
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('q'))),
            Some(Command::Insert('q'))
        );
        assert_eq!(key_to_command(&app, key(KeyCode::Esc)), Some(Command::Back));
    }

    #[test]
    fn test_placeholder_screens_only_go_back() {
        let mut app = app();
        app.switch_screen(Screen::Budgeting);
        assert_eq!(key_to_command(&app, key(KeyCode::Esc)), Some(Command::Back));
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('b'))),
            Some(Command::Back)
        );
        assert_eq!(key_to_command(&app, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_confirm_dialog_keys() {
        let mut app = app();
        app.open_dialog(Dialog::ConfirmExit);
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('y'))),
            Some(Command::ConfirmYes)
        );
        assert_eq!(
            key_to_command(&app, key(KeyCode::Char('n'))),
            Some(Command::ConfirmNo)
        );
        assert_eq!(key_to_command(&app, key(KeyCode::Esc)), Some(Command::ConfirmNo));
    }

    #[test]
    fn test_message_dialog_keys() {
        let mut app = app();
        app.open_dialog(Dialog::Error("oops".into()));
        assert_eq!(key_to_command(&app, key(KeyCode::Enter)), Some(Command::Dismiss));
        assert_eq!(key_to_command(&app, key(KeyCode::Char('x'))), None);
    }
}
