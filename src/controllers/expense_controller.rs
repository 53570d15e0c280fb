use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::expense_dto::{CreateExpenseRequest, DeleteExpenseResponse, ExpenseResponse};
use crate::dto::ListQuery;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{clamp_non_negative, non_empty, parse_required_date};

pub struct ExpenseController {
    repository: ExpenseRepository,
}

impl ExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ExpenseRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        organisation_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<ExpenseResponse>, AppError> {
        let expenses = self
            .repository
            .find_by_organisation(organisation_id, query.limit(), query.offset())
            .await?;

        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }

    pub async fn create(
        &self,
        organisation_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<ExpenseResponse, AppError> {
        let date = non_empty(request.date.as_ref());

        let (Some(trip_id), Some(date)) = (request.trip_id, date) else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: tripId, date".to_string(),
            ));
        };

        let date = parse_required_date(&date, "date")?;

        let fuel_amount = clamp_non_negative(request.fuel_amount);
        let fuel_cost = clamp_non_negative(request.fuel_cost);
        let other_expense = clamp_non_negative(request.other_expense);
        let expense_note = non_empty(request.expense_note.as_ref()).unwrap_or_default();

        let expense = self
            .repository
            .create(
                organisation_id,
                trip_id,
                fuel_amount,
                fuel_cost,
                other_expense,
                &expense_note,
                date,
            )
            .await?;

        Ok(ExpenseResponse::from(expense))
    }

    pub async fn remove(
        &self,
        id: Uuid,
        organisation_id: Uuid,
    ) -> Result<DeleteExpenseResponse, AppError> {
        let deleted = self
            .repository
            .delete(id, organisation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto no encontrado".to_string()))?;

        Ok(DeleteExpenseResponse {
            message: "Gasto eliminado".to_string(),
            id: deleted,
        })
    }
}
