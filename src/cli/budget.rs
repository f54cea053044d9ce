//! Budget CLI commands

use clap::Subcommand;

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{BudgetMonth, CreateBudgetRequest, Money};
use crate::session::Session;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the current month's budget
    Show,

    /// Set the budget for the current month
    Set {
        /// Amount (e.g., "100" or "100.00")
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    client: &ApiClient,
    session: &Session,
    cmd: BudgetCommands,
) -> AppResult<()> {
    match cmd {
        BudgetCommands::Show => {
            let month = BudgetMonth::current();
            match client.fetch_current_budget(session)? {
                Some(budget) => {
                    println!("Budget for {}: {}", month, budget.total_amount);
                }
                None => {
                    println!(
                        "No budget set up for {} yet. Run 'simplebudget budget set <amount>'.",
                        month
                    );
                }
            }
        }
        BudgetCommands::Set { amount } => {
            let amount =
                Money::parse(&amount).map_err(|e| AppError::Validation(e.to_string()))?;
            if !amount.is_positive() {
                return Err(AppError::Validation(
                    "budget amount must be greater than zero".into(),
                ));
            }

            let budget =
                client.create_budget(session, &CreateBudgetRequest::for_current_month(amount))?;
            println!(
                "Budget for {} set to {}",
                budget.month.unwrap_or_else(BudgetMonth::current),
                budget.total_amount
            );
        }
    }

    Ok(())
}
