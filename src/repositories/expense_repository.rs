use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::expense::Expense;
use crate::utils::errors::{map_foreign_key_violation, AppError};

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        organisation_id: Uuid,
        trip_id: Uuid,
        fuel_amount: i32,
        fuel_cost: i32,
        other_expense: i32,
        expense_note: &str,
        date: NaiveDate,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses
                (id, organisation_id, trip_id, fuel_amount, fuel_cost, other_expense, expense_note, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organisation_id)
        .bind(trip_id)
        .bind(fuel_amount)
        .bind(fuel_cost)
        .bind(other_expense)
        .bind(expense_note)
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                AppError::BadRequest("El viaje indicado no existe".to_string()),
            )
        })?;

        Ok(expense)
    }

    pub async fn find_by_organisation(
        &self,
        organisation_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT * FROM expenses
            WHERE organisation_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(organisation_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Borrado físico; None si la fila no pertenece a la organización
    pub async fn delete(&self, id: Uuid, organisation_id: Uuid) -> Result<Option<Uuid>, AppError> {
        let deleted: Option<(Uuid,)> = sqlx::query_as(
            "DELETE FROM expenses WHERE id = $1 AND organisation_id = $2 RETURNING id",
        )
        .bind(id)
        .bind(organisation_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted.map(|row| row.0))
    }
}
