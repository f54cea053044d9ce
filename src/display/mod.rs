//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display
//! from the one-shot CLI commands.

pub mod expense;

pub use expense::{format_expense_list, format_expense_row};
