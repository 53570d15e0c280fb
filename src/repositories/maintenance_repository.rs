use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::maintenance::MaintenanceLog;
use crate::utils::errors::{map_foreign_key_violation, AppError};

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un registro dentro de la transacción que además deja el
    /// vehículo en "In Shop"
    pub async fn create_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        organisation_id: Uuid,
        vehicle_id: Uuid,
        issue: &str,
        service_date: NaiveDate,
        cost: i32,
        status: &str,
    ) -> Result<MaintenanceLog, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs
                (id, organisation_id, vehicle_id, issue, service_date, cost, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organisation_id)
        .bind(vehicle_id)
        .bind(issue)
        .bind(service_date)
        .bind(cost)
        .bind(status)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                AppError::NotFound("Vehículo no encontrado".to_string()),
            )
        })?;

        Ok(log)
    }

    pub async fn find_by_organisation(
        &self,
        organisation_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MaintenanceLog>, AppError> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            SELECT * FROM maintenance_logs
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

        Ok(logs)
    }

    /// Cambiar el estado de un registro dentro de la transacción que puede
    /// liberar al vehículo; None si no pertenece a la organización
    pub async fn update_status_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        organisation_id: Uuid,
        status: &str,
    ) -> Result<Option<MaintenanceLog>, AppError> {
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            UPDATE maintenance_logs
            SET status = $3
            WHERE id = $1 AND organisation_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(organisation_id)
        .bind(status)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(log)
    }
}
