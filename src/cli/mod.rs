//! CLI command handlers
//!
//! One-shot equivalents of the TUI screens, bridging clap argument parsing
//! with the API client. Authenticated commands take the bearer token from
//! `--token` or the `SIMPLEBUDGET_TOKEN` environment variable, since the
//! session lives only as long as the process.

pub mod auth;
pub mod budget;
pub mod expense;

pub use auth::{handle_login, handle_register};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};

use crate::error::{AppError, AppResult};
use crate::session::Session;

/// Build a session from a CLI-provided token
pub fn session_from_token(token: Option<String>) -> AppResult<Session> {
    match token {
        Some(token) if !token.is_empty() => Ok(Session::with_token(token)),
        _ => Err(AppError::Config(
            "no API token provided; pass --token or set SIMPLEBUDGET_TOKEN (see 'simplebudget login')".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_token() {
        let session = session_from_token(Some("abc".into())).unwrap();
        assert!(session.is_authenticated());

        assert!(session_from_token(None).is_err());
        assert!(session_from_token(Some(String::new())).is_err());
    }
}
