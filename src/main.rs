use anyhow::Result;
use clap::{Parser, Subcommand};

use simplebudget_cli::api::ApiClient;
use simplebudget_cli::cli::{
    handle_budget_command, handle_expense_command, handle_login, handle_register,
    session_from_token, BudgetCommands, ExpenseCommands,
};
use simplebudget_cli::config::{paths::AppPaths, settings::Settings};
use simplebudget_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "simplebudget",
    version,
    about = "Terminal client for the SimpleBudget personal budgeting API",
    long_about = "SimpleBudget is a terminal client for a personal budgeting service. \
                  It covers registration, login, the current month's budget and \
                  expenses, and expense entry; all data lives on the server."
)]
struct Cli {
    /// API base URL (overrides the settings file)
    #[arg(long, env = "SIMPLEBUDGET_API_URL", global = true)]
    api_url: Option<String>,

    /// Bearer token for authenticated commands (see 'simplebudget login')
    #[arg(long, env = "SIMPLEBUDGET_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Register a new account
    Register {
        /// Email address
        #[arg(long)]
        email: String,
        /// Full name
        #[arg(long)]
        full_name: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and print the bearer token
    Login {
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Budget commands for the current month
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense commands for the current month
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&paths)?;

    let base_url = cli
        .api_url
        .unwrap_or_else(|| settings.api_base_url.clone());
    let client = ApiClient::new(base_url);

    match cli.command {
        Some(Commands::Tui) => {
            run_tui(client)?;
        }
        Some(Commands::Register {
            email,
            full_name,
            password,
        }) => {
            handle_register(&client, email, full_name, password)?;
        }
        Some(Commands::Login { email, password }) => {
            handle_login(&client, email, password)?;
        }
        Some(Commands::Budget(cmd)) => {
            let session = session_from_token(cli.token)?;
            handle_budget_command(&client, &session, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let session = session_from_token(cli.token)?;
            handle_expense_command(&client, &session, cmd)?;
        }
        Some(Commands::Config) => {
            println!("SimpleBudget Configuration");
            println!("==========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("API base URL: {}", client.base_url());
        }
        None => {
            println!("SimpleBudget - terminal client for the SimpleBudget API");
            println!();
            println!("Run 'simplebudget --help' for usage information.");
            println!("Run 'simplebudget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Route diagnostics to a log file; the TUI owns the terminal
fn init_logging(paths: &AppPaths) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    paths.ensure_directories()?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
