//! Current-month screen
//!
//! Shows the month's budget (total, spent, remaining) and its expenses.
//! When no budget exists yet the screen hosts the budget-setup form
//! instead; that state is signaled by the API with a 404 or a success body
//! without `totalAmount`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::models::Money;
use crate::tui::app::{App, BudgetStatus, InputMode};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::TextInput;

/// State for the budget-setup form shown when no budget exists
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub amount: TextInput,
    pub error: Option<String>,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            amount: TextInput::new().label("Monthly budget").placeholder("e.g. 2000.00"),
            error: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the current-month screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.budget_status {
        BudgetStatus::Unknown => render_loading(frame, area),
        BudgetStatus::NotSet => render_setup(frame, app, area),
        BudgetStatus::Set(budget) => render_overview(frame, app, budget.total_amount, area),
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(text, area);
}

/// The "set up your budget first" state with the inline budget form
fn render_setup(frame: &mut Frame, app: &App, area: Rect) {
    let layout = FormLayout::new(area);
    let editing = app.input_mode == InputMode::Editing;
    let form = &app.budget_form;

    let heading = Paragraph::new(format!("Set up your budget for {}", app.current_month))
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
            Constraint::Min(0),
        ])
        .split(layout.body);

    frame.render_widget(
        Paragraph::new("You need a monthly budget before you can add expenses.")
            .style(Style::default().fg(Color::White)),
        rows[0],
    );
    frame.render_widget(form.amount.clone().focused(editing), rows[2]);

    let hint = Paragraph::new("Enter: create budget    Esc: navigation mode")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, rows[3]);
}

/// The budget overview plus the expense list
fn render_overview(frame: &mut Frame, app: &App, total: Money, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary
            Constraint::Min(3),    // Expenses
        ])
        .split(area);

    let spent: Money = app.expenses.iter().map(|e| e.amount).sum();
    let remaining = total - spent;
    let remaining_color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let summary = vec![
        Line::from(vec![
            Span::styled("Budget:    ", Style::default().fg(Color::White)),
            Span::styled(
                total.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Spent:     ", Style::default().fg(Color::White)),
            Span::styled(spent.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(Color::White)),
            Span::styled(
                remaining.to_string(),
                Style::default().fg(remaining_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let summary_block = Block::default()
        .borders(Borders::BOTTOM)
        .title(format!(" {} ", app.current_month));
    frame.render_widget(Paragraph::new(summary).block(summary_block), chunks[0]);

    render_expense_table(frame, app, chunks[1]);
}

fn render_expense_table(frame: &mut Frame, app: &App, area: Rect) {
    if app.expenses.is_empty() {
        let text = Paragraph::new("No expenses recorded this month.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Keep the selected row visible in the available height
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app
        .selected_expense_index
        .saturating_sub(visible.saturating_sub(1));

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, expense)| {
            let style = if i == app.selected_expense_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                expense.amount.to_string(),
                expense.note.clone().unwrap_or_default(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Date", "Category", "Amount", "Note"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(table, area);
}
