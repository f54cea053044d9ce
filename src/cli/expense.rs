//! Expense CLI commands

use clap::Subcommand;

use crate::api::ApiClient;
use crate::display::format_expense_list;
use crate::error::{AppError, AppResult};
use crate::models::{CreateExpenseRequest, Money};
use crate::session::Session;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List the current month's expenses
    List,

    /// Add a new expense
    Add {
        /// Expense category (e.g., "Groceries")
        category: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    client: &ApiClient,
    session: &Session,
    cmd: ExpenseCommands,
) -> AppResult<()> {
    match cmd {
        ExpenseCommands::List => {
            let expenses = client.fetch_current_expenses(session)?;
            print!("{}", format_expense_list(&expenses));
        }
        ExpenseCommands::Add {
            category,
            amount,
            note,
        } => {
            let amount =
                Money::parse(&amount).map_err(|e| AppError::Validation(e.to_string()))?;
            if !amount.is_positive() {
                return Err(AppError::Validation(
                    "expense amount must be greater than zero".into(),
                ));
            }

            let expense = client.create_expense(
                session,
                &CreateExpenseRequest::for_today(category, amount, note),
            )?;
            println!(
                "Added {} expense of {} on {}",
                expense.category,
                expense.amount,
                expense.date.format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}
