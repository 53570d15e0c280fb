use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::expense::Expense;

// Request para registrar un gasto de viaje
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub trip_id: Option<Uuid>,
    pub fuel_amount: Option<i64>,
    pub fuel_cost: Option<i64>,
    pub other_expense: Option<i64>,
    pub expense_note: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub fuel_amount: i32,
    pub fuel_cost: i32,
    pub other_expense: i32,
    pub expense_note: String,
    pub date: String,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            trip_id: expense.trip_id,
            fuel_amount: expense.fuel_amount,
            fuel_cost: expense.fuel_cost,
            other_expense: expense.other_expense,
            expense_note: expense.expense_note,
            date: expense.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteExpenseResponse {
    pub message: String,
    pub id: Uuid,
}
