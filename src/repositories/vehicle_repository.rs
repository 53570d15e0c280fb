use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        organisation_id: Uuid,
        model: &str,
        plate: &str,
        vehicle_type: &str,
        capacity_kg: i32,
        status: &str,
        odometer_km: i32,
        purchase_date: Option<NaiveDate>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (id, organisation_id, model, plate, type, capacity_kg, status, odometer_km, purchase_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organisation_id)
        .bind(model)
        .bind(plate)
        .bind(vehicle_type)
        .bind(capacity_kg)
        .bind(status)
        .bind(odometer_km)
        .bind(purchase_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, "Ya existe un vehículo con esta matrícula en tu flota")
        })?;

        Ok(vehicle)
    }

    pub async fn find_by_organisation(
        &self,
        organisation_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
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

        Ok(vehicles)
    }

    pub async fn plate_exists(
        &self,
        plate: &str,
        organisation_id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1 AND organisation_id = $2)",
        )
        .bind(plate)
        .bind(organisation_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Cambiar el estado de un vehículo; None si no pertenece a la organización
    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        status: &str,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET status = $3
            WHERE id = $1 AND organisation_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(organisation_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Forzar el estado de un vehículo dentro de una transacción de
    /// mantenimiento. Devuelve las filas afectadas (0 = vehículo ajeno).
    pub async fn set_status_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        organisation_id: Uuid,
        status: &str,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE vehicles SET status = $3 WHERE id = $1 AND organisation_id = $2",
        )
        .bind(id)
        .bind(organisation_id)
        .bind(status)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }

    /// Liberar un vehículo de "In Shop" solo si no queda ningún otro
    /// registro de mantenimiento abierto. La condición se evalúa en la
    /// misma sentencia para que dos cierres concurrentes no lo liberen
    /// de más ni lo dejen atascado.
    pub async fn release_from_shop_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        vehicle_id: Uuid,
        organisation_id: Uuid,
        completed_log_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles v
            SET status = 'Available'
            WHERE v.id = $1
              AND v.organisation_id = $2
              AND v.status = 'In Shop'
              AND NOT EXISTS (
                  SELECT 1 FROM maintenance_logs m
                  WHERE m.vehicle_id = $1
                    AND m.organisation_id = $2
                    AND m.status <> 'Completed'
                    AND m.id <> $3
              )
            "#,
        )
        .bind(vehicle_id)
        .bind(organisation_id)
        .bind(completed_log_id)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected())
    }
}
