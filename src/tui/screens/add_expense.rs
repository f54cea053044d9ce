//! Add-expense screen
//!
//! Category/amount/note form, only usable once a budget exists for the
//! current month. Without one it shows the setup pointer instead, matching
//! the budget-presence check the API contract requires before expense
//! creation.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, BudgetStatus, InputMode};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::TextInput;

/// Which field is focused on the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
    Note,
}

/// State for the expense form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub category: TextInput,
    pub amount: TextInput,
    pub note: TextInput,
    pub focused: ExpenseField,
    pub error: Option<String>,
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            category: TextInput::new().label("Category").placeholder("e.g. Groceries"),
            amount: TextInput::new().label("Amount ($)").placeholder("e.g. 12.50"),
            note: TextInput::new().label("Note"),
            focused: ExpenseField::Category,
            error: None,
        }
    }

    /// Reset the form, as happens whenever the screen is entered
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            ExpenseField::Category => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Note,
            ExpenseField::Note => ExpenseField::Category,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            ExpenseField::Category => ExpenseField::Note,
            ExpenseField::Amount => ExpenseField::Category,
            ExpenseField::Note => ExpenseField::Amount,
        };
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            ExpenseField::Category => &mut self.category,
            ExpenseField::Amount => &mut self.amount,
            ExpenseField::Note => &mut self.note,
        }
    }
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the add-expense screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.budget_status {
        BudgetStatus::Unknown => {
            let text = Paragraph::new("Loading...")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(text, area);
        }
        BudgetStatus::NotSet => render_needs_budget(frame, area),
        BudgetStatus::Set(_) => render_form(frame, app, area),
    }
}

fn render_needs_budget(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new("Set up your budget first")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(heading, chunks[0]);

    frame.render_widget(
        Paragraph::new("You need to set a monthly budget before you can add expenses.")
            .centered(),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new("Press 1 to go to Current Month.")
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        chunks[2],
    );
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormLayout::new(area);
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.expense_form;

    let heading = Paragraph::new("Enter a new expense")
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
        form.category
            .clone()
            .focused(editing && form.focused == ExpenseField::Category),
        rows[0],
    );
    frame.render_widget(
        form.amount
            .clone()
            .focused(editing && form.focused == ExpenseField::Amount),
        rows[2],
    );
    frame.render_widget(
        form.note
            .clone()
            .focused(editing && form.focused == ExpenseField::Note),
        rows[4],
    );

    let hint = Paragraph::new("Enter: submit    Tab: next field    Esc: navigation mode")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[6]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_order() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.focused, ExpenseField::Category);
        form.focus_next();
        assert_eq!(form.focused, ExpenseField::Amount);
        form.focus_next();
        assert_eq!(form.focused, ExpenseField::Note);
        form.focus_next();
        assert_eq!(form.focused, ExpenseField::Category);

        form.focus_prev();
        assert_eq!(form.focused, ExpenseField::Note);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ExpenseFormState::new();
        form.category.insert('G');
        form.amount.insert('5');
        form.note.insert('n');
        form.error = Some("Expense creation failed".into());

        form.reset();
        assert_eq!(form.category.value(), "");
        assert_eq!(form.amount.value(), "");
        assert_eq!(form.note.value(), "");
        assert!(form.error.is_none());
    }
}
