//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal output from the
//! one-shot CLI commands.

use crate::models::{Expense, Money};

/// Format a single expense for display (listing row)
pub fn format_expense_row(expense: &Expense) -> String {
    let note_display = expense.note.as_deref().unwrap_or("");

    format!(
        "{} {:20} {:>12} {}",
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.category, 20),
        expense.amount.to_string(),
        note_display
    )
}

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded this month.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>12} {}\n",
        "Date", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!("{:31} {:>12}\n", "Total", total.to_string()));

    output
}

/// Truncate a string to a fixed width, padding with spaces
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn expense(category: &str, cents: i64, note: Option<&str>) -> Expense {
        Expense {
            id: Uuid::nil(),
            category: category.to_string(),
            amount: Money::from_cents(cents),
            note: note.map(String::from),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        }
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(&expense("Groceries", 15000, Some("weekly")));
        assert!(row.contains("2024-03-10"));
        assert!(row.contains("Groceries"));
        assert!(row.contains("$150.00"));
        assert!(row.contains("weekly"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[]), "No expenses recorded this month.\n");
    }

    #[test]
    fn test_format_list_includes_total() {
        let expenses = vec![
            expense("Groceries", 15000, None),
            expense("Coffee", 450, None),
        ];
        let output = format_expense_list(&expenses);
        assert!(output.contains("Total"));
        assert!(output.contains("$154.50"));
    }

    #[test]
    fn test_truncate_long_category() {
        let row = format_expense_row(&expense(
            "a very long category name that overflows",
            100,
            None,
        ));
        assert!(row.contains("..."));
    }
}
