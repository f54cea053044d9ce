//! Application state for the TUI
//!
//! The App struct owns the session, the API client, and all per-screen
//! form state. Every navigation request goes through the screen gate, so
//! an unreachable screen silently lands on the gate's redirect target.

use crate::api::ApiClient;
use crate::models::{
    Budget, BudgetMonth, CreateBudgetRequest, CreateExpenseRequest, Expense, LoginRequest, Money,
    RegisterRequest,
};
use crate::session::{redirect_target, Screen, Session};

use super::screens::add_expense::ExpenseFormState;
use super::screens::home::BudgetFormState;
use super::screens::login::LoginFormState;
use super::screens::registration::RegistrationFormState;
use super::widgets::{Notification, NotificationQueue};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate between screens
    #[default]
    Normal,
    /// Keys type into the active form
    Editing,
}

/// What is known about the current month's budget
///
/// Mirrors the tri-state the add-expense flow needs: not asked yet,
/// confirmed absent (setup required), or present.
#[derive(Debug, Clone, Default)]
pub enum BudgetStatus {
    #[default]
    Unknown,
    NotSet,
    Set(Budget),
}

impl BudgetStatus {
    /// Whether a budget is known to exist
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }
}

/// Main application state
pub struct App {
    /// Client for the SimpleBudget API
    pub client: ApiClient,

    /// The process-local session (bearer token)
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub active_screen: Screen,

    /// Current input mode
    pub input_mode: InputMode,

    /// The operative month (the client's current calendar month)
    pub current_month: BudgetMonth,

    /// What we know about the current month's budget
    pub budget_status: BudgetStatus,

    /// The current month's expenses
    pub expenses: Vec<Expense>,

    /// Selected expense index on the home screen
    pub selected_expense_index: usize,

    /// Login form state
    pub login_form: LoginFormState,

    /// Registration form state
    pub registration_form: RegistrationFormState,

    /// Expense form state
    pub expense_form: ExpenseFormState,

    /// Budget-setup form state (home screen, budget absent)
    pub budget_form: BudgetFormState,

    /// Toast notifications
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance
    ///
    /// The initial screen is registration; the session starts
    /// unauthenticated.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: Session::new(),
            should_quit: false,
            active_screen: Screen::Registration,
            input_mode: InputMode::Editing,
            current_month: BudgetMonth::current(),
            budget_status: BudgetStatus::default(),
            expenses: Vec::new(),
            selected_expense_index: 0,
            login_form: LoginFormState::new(),
            registration_form: RegistrationFormState::new(),
            expense_form: ExpenseFormState::new(),
            budget_form: BudgetFormState::new(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the active screen currently accepts form input
    pub fn has_form(&self) -> bool {
        match self.active_screen {
            Screen::Login | Screen::Registration => true,
            // Home hosts the budget-setup form only while no budget exists
            Screen::Home => matches!(self.budget_status, BudgetStatus::NotSet),
            Screen::AddExpense => self.budget_status.is_set(),
        }
    }

    /// Navigate to a screen, letting the gate pick the landing screen
    ///
    /// Entering a screen resets its form state and clears stale messages;
    /// the data screens also reload from the API.
    pub fn navigate(&mut self, screen: Screen) {
        let target = redirect_target(screen, &self.session).unwrap_or(screen);
        self.active_screen = target;
        self.reset_screen_state(target);

        if matches!(target, Screen::Home | Screen::AddExpense) {
            self.refresh();
        }

        self.input_mode = if self.has_form() {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    fn reset_screen_state(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.login_form.reset(),
            Screen::Registration => self.registration_form.reset(),
            Screen::AddExpense => self.expense_form.reset(),
            Screen::Home => {
                self.budget_form.reset();
                self.selected_expense_index = 0;
            }
        }
    }

    /// Reload the current month's budget and expenses
    pub fn refresh(&mut self) {
        self.current_month = BudgetMonth::current();

        match self.client.fetch_current_budget(&self.session) {
            Ok(Some(budget)) => self.budget_status = BudgetStatus::Set(budget),
            Ok(None) => self.budget_status = BudgetStatus::NotSet,
            Err(err) => {
                // A failed check is treated as "no budget"; the message
                // is still surfaced.
                self.budget_status = BudgetStatus::NotSet;
                self.notifications.push(Notification::error(err.user_message()));
            }
        }

        if self.budget_status.is_set() {
            match self.client.fetch_current_expenses(&self.session) {
                Ok(expenses) => {
                    self.expenses = expenses;
                    let max = self.expenses.len().saturating_sub(1);
                    self.selected_expense_index = self.selected_expense_index.min(max);
                }
                Err(err) => {
                    self.notifications.push(Notification::error(err.user_message()));
                }
            }
        } else {
            self.expenses.clear();
            self.selected_expense_index = 0;
        }
    }

    /// Clear the session and return to the login screen
    pub fn logout(&mut self) {
        self.session.clear();
        self.budget_status = BudgetStatus::Unknown;
        self.expenses.clear();
        self.selected_expense_index = 0;
        self.notifications.push(Notification::info("Logged out"));
        self.navigate(Screen::Login);
    }

    /// Submit whichever form the active screen is showing
    pub fn submit_active_form(&mut self) {
        match self.active_screen {
            Screen::Login => self.submit_login(),
            Screen::Registration => self.submit_registration(),
            Screen::AddExpense => self.submit_expense(),
            Screen::Home => self.submit_budget(),
        }
    }

    /// Clear the error message of the active form (on edit)
    pub fn clear_active_form_error(&mut self) {
        match self.active_screen {
            Screen::Login => self.login_form.error = None,
            Screen::Registration => self.registration_form.error = None,
            Screen::AddExpense => self.expense_form.error = None,
            Screen::Home => self.budget_form.error = None,
        }
    }

    fn submit_login(&mut self) {
        let request = LoginRequest {
            email: self.login_form.email.value().trim().to_string(),
            password: self.login_form.password.value().to_string(),
        };

        match self.client.login(&request) {
            Ok(token) => {
                self.session.set_token(token);
                self.notifications.push(Notification::success("Login successful"));
                self.navigate(Screen::Home);
            }
            Err(err) => {
                // Failure leaves the session untouched
                self.login_form.error = Some(err.user_message());
            }
        }
    }

    fn submit_registration(&mut self) {
        let request = RegisterRequest {
            email: self.registration_form.email.value().trim().to_string(),
            full_name: self.registration_form.full_name.value().trim().to_string(),
            password: self.registration_form.password.value().to_string(),
        };

        match self.client.register(&request) {
            Ok(()) => {
                self.notifications
                    .push(Notification::success("Registration successful"));
                self.navigate(Screen::Login);
            }
            Err(err) => {
                self.registration_form.error = Some(err.user_message());
            }
        }
    }

    fn submit_budget(&mut self) {
        let amount = match Money::parse(self.budget_form.amount.value().trim()) {
            Ok(amount) => amount,
            Err(_) => {
                self.budget_form.error = Some("Enter a valid amount".into());
                return;
            }
        };
        if !amount.is_positive() {
            self.budget_form.error = Some("Budget amount must be greater than zero".into());
            return;
        }

        let request = CreateBudgetRequest::for_current_month(amount);
        match self.client.create_budget(&self.session, &request) {
            Ok(_) => {
                self.notifications.push(Notification::success("Budget created"));
                // Reload so the overview reflects the server's view
                self.refresh();
                self.input_mode = InputMode::Normal;
            }
            Err(err) => {
                self.budget_form.error = Some(err.user_message());
            }
        }
    }

    fn submit_expense(&mut self) {
        if !self.budget_status.is_set() {
            return;
        }

        let category = self.expense_form.category.value().trim().to_string();
        if category.is_empty() {
            self.expense_form.error = Some("Category is required".into());
            return;
        }

        let amount = match Money::parse(self.expense_form.amount.value().trim()) {
            Ok(amount) => amount,
            Err(_) => {
                self.expense_form.error = Some("Enter a valid amount".into());
                return;
            }
        };
        if !amount.is_positive() {
            self.expense_form.error = Some("Expense amount must be greater than zero".into());
            return;
        }

        let note = self.expense_form.note.value().trim();
        let note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };

        let request = CreateExpenseRequest::for_today(category, amount, note);
        match self.client.create_expense(&self.session, &request) {
            Ok(_) => {
                self.expense_form.reset();
                self.notifications
                    .push(Notification::success("Expense added successfully"));
            }
            Err(err) => {
                self.expense_form.error = Some(err.user_message());
            }
        }
    }

    /// Move the expense selection up (home screen)
    pub fn select_prev_expense(&mut self) {
        if self.selected_expense_index > 0 {
            self.selected_expense_index -= 1;
        }
    }

    /// Move the expense selection down (home screen)
    pub fn select_next_expense(&mut self) {
        if self.selected_expense_index + 1 < self.expenses.len() {
            self.selected_expense_index += 1;
        }
    }
}
