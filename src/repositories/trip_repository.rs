use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trip::Trip;
use crate::utils::errors::{map_foreign_key_violation, AppError};

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un viaje; el estado se fija en 'Draft' en la propia sentencia
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        organisation_id: Uuid,
        vehicle_id: Uuid,
        driver_id: Uuid,
        origin: &str,
        destination: &str,
        departure_time: Option<NaiveDateTime>,
        eta: Option<NaiveDateTime>,
        cargo_weight: i32,
        estimated_cost: i32,
    ) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips
                (id, organisation_id, vehicle_id, driver_id, origin, destination,
                 status, departure_time, eta, cargo_weight, estimated_cost)
            VALUES ($1, $2, $3, $4, $5, $6, 'Draft', $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organisation_id)
        .bind(vehicle_id)
        .bind(driver_id)
        .bind(origin)
        .bind(destination)
        .bind(departure_time)
        .bind(eta)
        .bind(cargo_weight)
        .bind(estimated_cost)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(
                e,
                AppError::BadRequest("El vehículo o el conductor indicado no existe".to_string()),
            )
        })?;

        Ok(trip)
    }

    pub async fn find_by_organisation(
        &self,
        organisation_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT * FROM trips
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

        Ok(trips)
    }

    /// Cambiar el estado de un viaje; None si no pertenece a la organización
    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        status: &str,
    ) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
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

        Ok(trip)
    }
}
