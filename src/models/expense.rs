//! Expense wire types
//!
//! Expenses are always scoped server-side to the current month; the client
//! sets the `date` field to its current local date at submission time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;

/// An expense record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier
    #[serde(rename = "expenseId")]
    pub id: Uuid,

    /// Expense category (free text)
    pub category: String,

    /// Expense amount
    pub amount: Money,

    /// Optional note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Expense date (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Request body for `POST /expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    /// Expense amount
    pub amount: Money,

    /// Expense category
    pub category: String,

    /// Optional note
    pub note: Option<String>,

    /// Submission date, always the caller's current local date
    pub date: NaiveDate,
}

impl CreateExpenseRequest {
    /// Build a request dated with the caller's current local date
    pub fn for_today(category: impl Into<String>, amount: Money, note: Option<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note,
            date: chrono::Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_response() {
        let body = json!({
            "expenseId": "550e8400-e29b-41d4-a716-446655440000",
            "userId": "660e8400-e29b-41d4-a716-446655440000",
            "amount": 150.0,
            "category": "Groceries",
            "date": "2024-03-10",
            "note": "Weekly shopping",
            "createdAt": "2024-03-10T12:00:00Z"
        });
        let expense: Expense = serde_json::from_value(body).unwrap();
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.amount, Money::from_cents(15000));
        assert_eq!(expense.note.as_deref(), Some("Weekly shopping"));
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_deserialize_null_note() {
        let body = json!({
            "expenseId": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 12.5,
            "category": "Coffee",
            "date": "2024-03-10",
            "note": null
        });
        let expense: Expense = serde_json::from_value(body).unwrap();
        assert!(expense.note.is_none());
    }

    #[test]
    fn test_create_request_wire_shape() {
        // A user-typed "12.50" goes out as numeric 12.5 with a YYYY-MM-DD date
        let req = CreateExpenseRequest {
            amount: Money::parse("12.50").unwrap(),
            category: "Lunch".into(),
            note: Some("team lunch".into()),
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": 12.5,
                "category": "Lunch",
                "note": "team lunch",
                "date": "2026-08-07"
            })
        );
    }

    #[test]
    fn test_for_today_uses_current_date() {
        let req = CreateExpenseRequest::for_today("Lunch", Money::from_cents(1250), None);
        assert_eq!(req.date, chrono::Local::now().date_naive());
    }
}
