//! Modelo de Expense
//!
//! Mapea exactamente a la tabla expenses. Es el único recurso que se
//! elimina físicamente.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub trip_id: Uuid,
    pub fuel_amount: i32,
    pub fuel_cost: i32,
    pub other_expense: i32,
    pub expense_note: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
