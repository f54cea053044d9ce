//! Authentication CLI commands
//!
//! Registration and login against the SimpleBudget API. Passwords are
//! prompted interactively when not supplied on the command line.

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, RegisterRequest};

/// Handle the `register` command
pub fn handle_register(
    client: &ApiClient,
    email: String,
    full_name: String,
    password: Option<String>,
) -> AppResult<()> {
    let password = password_or_prompt(password)?;

    client.register(&RegisterRequest {
        email,
        full_name,
        password,
    })?;

    println!("Registration successful. You can now log in with 'simplebudget login'.");
    Ok(())
}

/// Handle the `login` command
///
/// Prints the bearer token so it can be exported for subsequent commands.
pub fn handle_login(client: &ApiClient, email: String, password: Option<String>) -> AppResult<()> {
    let password = password_or_prompt(password)?;

    let token = client.login(&LoginRequest { email, password })?;

    println!("Login successful.");
    println!();
    println!("export SIMPLEBUDGET_TOKEN={}", token);
    Ok(())
}

fn password_or_prompt(password: Option<String>) -> AppResult<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| AppError::Io(format!("Failed to read password: {}", e))),
    }
}
