//! Login screen
//!
//! Email/password form. A successful login stores the token in the session
//! and navigates to the current-month screen; a failure shows the
//! normalized error and leaves the session unchanged.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::TextInput;

/// Which field is focused on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// State for the login form
#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub email: TextInput,
    pub password: TextInput,
    pub focused: LoginField,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: TextInput::new().label("Email").placeholder("you@example.com"),
            password: TextInput::new().label("Password").masked(true),
            focused: LoginField::Email,
            error: None,
        }
    }

    /// Reset the form, as happens whenever the screen is entered
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide
        self.focus_next();
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the login screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormLayout::new(area);
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.login_form;

    let heading = Paragraph::new("Welcome Back!")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(heading, layout.heading);

    if let Some(ref error) = form.error {
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .centered();
        frame.render_widget(message, layout.message);
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(layout.body);

    frame.render_widget(
        form.email
            .clone()
            .focused(editing && form.focused == LoginField::Email),
        rows[0],
    );
    frame.render_widget(
        form.password
            .clone()
            .focused(editing && form.focused == LoginField::Password),
        rows[2],
    );

    let hint = Paragraph::new("Enter: log in    Tab: next field    Esc: navigation mode")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_between_fields() {
        let mut form = LoginFormState::new();
        assert_eq!(form.focused, LoginField::Email);
        form.focus_next();
        assert_eq!(form.focused, LoginField::Password);
        form.focus_next();
        assert_eq!(form.focused, LoginField::Email);
    }

    #[test]
    fn test_reset_clears_fields_and_error() {
        let mut form = LoginFormState::new();
        form.email.insert('a');
        form.password.insert('b');
        form.error = Some("Login failed".into());

        form.reset();
        assert_eq!(form.email.value(), "");
        assert_eq!(form.password.value(), "");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_password_is_masked() {
        let form = LoginFormState::new();
        assert!(form.password.masked);
        assert!(!form.email.masked);
    }
}
