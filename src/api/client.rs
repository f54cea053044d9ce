//! HTTP client for the SimpleBudget API
//!
//! One blocking request per operation, no retry, no caching. Response
//! decoding lives in pure `(status, body)` helpers so the branch logic is
//! testable without a network. Transport failures are logged and surfaced
//! as the operation's generic fallback message; non-success responses go
//! through the error normalizer.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{
    Budget, CreateBudgetRequest, CreateExpenseRequest, Expense, LoginRequest, RegisterRequest,
    TokenResponse,
};
use crate::session::Session;

use super::payload::normalize_error;

const REGISTER_FALLBACK: &str = "Registration failed";
const LOGIN_FALLBACK: &str = "Login failed";
const BUDGET_FETCH_FALLBACK: &str = "Could not load budget";
const BUDGET_CREATE_FALLBACK: &str = "Budget creation failed";
const EXPENSE_FETCH_FALLBACK: &str = "Could not load expenses";
const EXPENSE_CREATE_FALLBACK: &str = "Expense creation failed";

/// Client for the SimpleBudget API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8000/api/v1`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// The base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        match session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and read the body as loose JSON
    ///
    /// A body that is not JSON decodes to Null, which the normalizer maps
    /// to the fallback message.
    fn send(&self, builder: RequestBuilder, fallback: &str) -> AppResult<(StatusCode, Value)> {
        let response = builder.send().map_err(|e| {
            warn!(error = %e, "request failed before reaching the API");
            AppError::Transport(fallback.to_string())
        })?;
        let status = response.status();
        let body = response.json::<Value>().unwrap_or(Value::Null);
        debug!(status = status.as_u16(), "API response");
        Ok((status, body))
    }

    /// `POST /auth/register`
    pub fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        let builder = self.http.post(self.url("/auth/register")).json(request);
        let (status, body) = self.send(builder, REGISTER_FALLBACK)?;
        decode_register(status, &body)
    }

    /// `POST /auth/login`
    ///
    /// Returns the bearer token; storing it in the session is the caller's
    /// responsibility.
    pub fn login(&self, request: &LoginRequest) -> AppResult<String> {
        let builder = self.http.post(self.url("/auth/login")).json(request);
        let (status, body) = self.send(builder, LOGIN_FALLBACK)?;
        decode_login(status, &body)
    }

    /// `GET /budgets/current-month`
    ///
    /// Ok(None) means no budget has been set up for the current month yet
    /// (a 404, or a success body without `totalAmount`).
    pub fn fetch_current_budget(&self, session: &Session) -> AppResult<Option<Budget>> {
        let builder = self.bearer(self.http.get(self.url("/budgets/current-month")), session);
        let (status, body) = self.send(builder, BUDGET_FETCH_FALLBACK)?;
        decode_current_budget(status, &body)
    }

    /// `POST /budgets`
    pub fn create_budget(
        &self,
        session: &Session,
        request: &CreateBudgetRequest,
    ) -> AppResult<Budget> {
        let builder = self.bearer(self.http.post(self.url("/budgets")), session).json(request);
        let (status, body) = self.send(builder, BUDGET_CREATE_FALLBACK)?;
        decode_created_budget(status, &body)
    }

    /// `GET /expenses/current-month`
    pub fn fetch_current_expenses(&self, session: &Session) -> AppResult<Vec<Expense>> {
        let builder = self.bearer(self.http.get(self.url("/expenses/current-month")), session);
        let (status, body) = self.send(builder, EXPENSE_FETCH_FALLBACK)?;
        decode_expenses(status, &body)
    }

    /// `POST /expenses`
    pub fn create_expense(
        &self,
        session: &Session,
        request: &CreateExpenseRequest,
    ) -> AppResult<Expense> {
        let builder = self.bearer(self.http.post(self.url("/expenses")), session).json(request);
        let (status, body) = self.send(builder, EXPENSE_CREATE_FALLBACK)?;
        decode_created_expense(status, &body)
    }
}

fn api_error(status: StatusCode, body: &Value, fallback: &str) -> AppError {
    let message = normalize_error(body, fallback);
    warn!(status = status.as_u16(), %message, "API request rejected");
    AppError::api(status.as_u16(), message)
}

fn decode_register(status: StatusCode, body: &Value) -> AppResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status, body, REGISTER_FALLBACK))
    }
}

fn decode_login(status: StatusCode, body: &Value) -> AppResult<String> {
    if !status.is_success() {
        return Err(api_error(status, body, LOGIN_FALLBACK));
    }
    let token: TokenResponse = serde_json::from_value(body.clone())?;
    Ok(token.access_token)
}

fn decode_current_budget(status: StatusCode, body: &Value) -> AppResult<Option<Budget>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(api_error(status, body, BUDGET_FETCH_FALLBACK));
    }
    // A success body without totalAmount means the budget isn't set up yet
    if body.get("totalAmount").is_none() {
        return Ok(None);
    }
    Ok(serde_json::from_value(body.clone()).ok())
}

fn decode_created_budget(status: StatusCode, body: &Value) -> AppResult<Budget> {
    if !status.is_success() {
        return Err(api_error(status, body, BUDGET_CREATE_FALLBACK));
    }
    Ok(serde_json::from_value(body.clone())?)
}

fn decode_expenses(status: StatusCode, body: &Value) -> AppResult<Vec<Expense>> {
    if !status.is_success() {
        return Err(api_error(status, body, EXPENSE_FETCH_FALLBACK));
    }
    Ok(serde_json::from_value(body.clone())?)
}

fn decode_created_expense(status: StatusCode, body: &Value) -> AppResult<Expense> {
    if !status.is_success() {
        return Err(api_error(status, body, EXPENSE_CREATE_FALLBACK));
    }
    Ok(serde_json::from_value(body.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");
        assert_eq!(
            client.url("/auth/login"),
            "http://localhost:8000/api/v1/auth/login"
        );
    }

    #[test]
    fn test_decode_login_success() {
        let body = json!({ "access_token": "abc", "token_type": "bearer" });
        let token = decode_login(StatusCode::OK, &body).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_decode_login_failure_is_normalized() {
        let body = json!({ "error": { "message": "bad creds" } });
        let err = decode_login(StatusCode::UNAUTHORIZED, &body).unwrap_err();
        assert_eq!(err.to_string(), "bad creds");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_decode_login_failure_without_body_uses_fallback() {
        let err = decode_login(StatusCode::INTERNAL_SERVER_ERROR, &Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[test]
    fn test_decode_register_validation_error() {
        let body = json!({
            "details": [{ "field": "full_name", "issue": "is required" }]
        });
        let err = decode_register(StatusCode::BAD_REQUEST, &body).unwrap_err();
        assert_eq!(err.to_string(), "Full Name: is required");
    }

    #[test]
    fn test_decode_budget_404_means_not_set() {
        let body = json!({ "error": { "message": "Budget not found" } });
        let result = decode_current_budget(StatusCode::NOT_FOUND, &body).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_decode_budget_missing_total_means_not_set() {
        let body = json!({ "month": "2024-03" });
        let result = decode_current_budget(StatusCode::OK, &body).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_decode_budget_success() {
        let body = json!({ "totalAmount": 5000.0, "month": "2024-03" });
        let budget = decode_current_budget(StatusCode::OK, &body).unwrap().unwrap();
        assert_eq!(budget.total_amount, Money::from_cents(500000));
    }

    #[test]
    fn test_decode_budget_other_status_is_error() {
        let body = json!({ "message": "nope" });
        let err = decode_current_budget(StatusCode::FORBIDDEN, &body).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_decode_expenses() {
        let body = json!([
            {
                "expenseId": "550e8400-e29b-41d4-a716-446655440000",
                "amount": 12.5,
                "category": "Coffee",
                "date": "2024-03-10"
            }
        ]);
        let expenses = decode_expenses(StatusCode::OK, &body).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_cents(1250));
    }

    #[test]
    fn test_decode_expenses_empty_list() {
        let expenses = decode_expenses(StatusCode::OK, &json!([])).unwrap();
        assert!(expenses.is_empty());
    }

    #[test]
    fn test_decode_created_expense_failure() {
        let body = json!({ "message": "Expense amount must be positive" });
        let err = decode_created_expense(StatusCode::BAD_REQUEST, &body).unwrap_err();
        assert_eq!(err.to_string(), "Expense amount must be positive");
    }
}
