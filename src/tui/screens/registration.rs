//! Registration screen
//!
//! Email/full name/password form. A successful registration navigates to
//! the login screen; a failure shows the normalized error.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::TextInput;

/// Which field is focused on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationField {
    #[default]
    Email,
    FullName,
    Password,
}

/// State for the registration form
#[derive(Debug, Clone)]
pub struct RegistrationFormState {
    pub email: TextInput,
    pub full_name: TextInput,
    pub password: TextInput,
    pub focused: RegistrationField,
    pub error: Option<String>,
}

impl RegistrationFormState {
    pub fn new() -> Self {
        Self {
            email: TextInput::new().label("Email").placeholder("you@example.com"),
            full_name: TextInput::new().label("Full Name"),
            password: TextInput::new().label("Password").masked(true),
            focused: RegistrationField::Email,
            error: None,
        }
    }

    /// Reset the form, as happens whenever the screen is entered
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            RegistrationField::Email => RegistrationField::FullName,
            RegistrationField::FullName => RegistrationField::Password,
            RegistrationField::Password => RegistrationField::Email,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            RegistrationField::Email => RegistrationField::Password,
            RegistrationField::FullName => RegistrationField::Email,
            RegistrationField::Password => RegistrationField::FullName,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            RegistrationField::Email => &mut self.email,
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::Password => &mut self.password,
        }
    }
}

impl Default for RegistrationFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the registration screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormLayout::new(area);
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.registration_form;

    let heading = Paragraph::new("Register for SimpleBudget")
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
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(layout.body);

    frame.render_widget(
        form.email
            .clone()
            .focused(editing && form.focused == RegistrationField::Email),
        rows[0],
    );
    frame.render_widget(
        form.full_name
            .clone()
            .focused(editing && form.focused == RegistrationField::FullName),
        rows[2],
    );
    frame.render_widget(
        form.password
            .clone()
            .focused(editing && form.focused == RegistrationField::Password),
        rows[4],
    );

    let hint = Paragraph::new("Enter: register    Tab: next field    Esc: navigation mode")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[6]);
}
