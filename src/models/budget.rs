//! Budget wire types
//!
//! The monthly budget as returned by `GET /budgets/current-month` and
//! `POST /budgets`. Only `totalAmount` is load-bearing for the client;
//! its absence in a success body means no budget has been set up yet.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;
use super::month::BudgetMonth;

/// A monthly budget as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Server-assigned identifier
    #[serde(rename = "budgetId", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// The month this budget covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<BudgetMonth>,

    /// Total budgeted amount for the month
    #[serde(rename = "totalAmount")]
    pub total_amount: Money,
}

/// Request body for `POST /budgets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetRequest {
    /// The month to budget, always the caller's current month
    pub month: BudgetMonth,

    /// Budget amount; must be validated as positive before sending
    pub amount: Money,
}

impl CreateBudgetRequest {
    /// Build a request for the current calendar month
    pub fn for_current_month(amount: Money) -> Self {
        Self {
            month: BudgetMonth::current(),
            amount,
        }
    }
}
