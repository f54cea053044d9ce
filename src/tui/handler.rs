//! Event handler for the TUI
//!
//! Routes keyboard events based on the current input mode: Normal keys
//! navigate between screens (through the gate), Editing keys type into the
//! active form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::Screen;

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits regardless of mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in navigation mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Screen navigation; the gate redirects unreachable targets
        KeyCode::Char('1') => app.navigate(Screen::Home),
        KeyCode::Char('2') => app.navigate(Screen::AddExpense),
        KeyCode::Char('3') => app.navigate(Screen::Login),
        KeyCode::Char('4') => app.navigate(Screen::Registration),

        // Logout
        KeyCode::Char('x') => {
            if app.session.is_authenticated() {
                app.logout();
            }
        }

        // Reload the data screens
        KeyCode::Char('r') => {
            if matches!(app.active_screen, Screen::Home | Screen::AddExpense) {
                app.refresh();
            }
        }

        // Enter the active form
        KeyCode::Char('i') | KeyCode::Enter => {
            if app.has_form() {
                app.input_mode = InputMode::Editing;
            }
        }

        // Expense selection on the home screen
        KeyCode::Char('j') | KeyCode::Down => {
            if app.active_screen == Screen::Home {
                app.select_next_expense();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.active_screen == Screen::Home {
                app.select_prev_expense();
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a form is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }

        KeyCode::Enter => {
            app.submit_active_form();
        }

        KeyCode::Tab | KeyCode::Down => focus_next(app),
        KeyCode::BackTab | KeyCode::Up => focus_prev(app),

        KeyCode::Char(c) => {
            // Typing clears a displayed message
            app.clear_active_form_error();
            if let Some(input) = focused_input(app) {
                input.insert(c);
            }
        }
        KeyCode::Backspace => {
            app.clear_active_form_error();
            if let Some(input) = focused_input(app) {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = focused_input(app) {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = focused_input(app) {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = focused_input(app) {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = focused_input(app) {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = focused_input(app) {
                input.move_end();
            }
        }

        _ => {}
    }

    Ok(())
}

fn focus_next(app: &mut App) {
    match app.active_screen {
        Screen::Login => app.login_form.focus_next(),
        Screen::Registration => app.registration_form.focus_next(),
        Screen::AddExpense => app.expense_form.focus_next(),
        // The budget form has a single field
        Screen::Home => {}
    }
}

fn focus_prev(app: &mut App) {
    match app.active_screen {
        Screen::Login => app.login_form.focus_prev(),
        Screen::Registration => app.registration_form.focus_prev(),
        Screen::AddExpense => app.expense_form.focus_prev(),
        Screen::Home => {}
    }
}

fn focused_input(app: &mut App) -> Option<&mut super::widgets::TextInput> {
    match app.active_screen {
        Screen::Login => Some(app.login_form.focused_input_mut()),
        Screen::Registration => Some(app.registration_form.focused_input_mut()),
        Screen::AddExpense => Some(app.expense_form.focused_input_mut()),
        Screen::Home => {
            if app.has_form() {
                Some(&mut app.budget_form.amount)
            } else {
                None
            }
        }
    }
}
