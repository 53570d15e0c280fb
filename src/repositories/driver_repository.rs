use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        organisation_id: Uuid,
        name: &str,
        phone: &str,
        license_number: &str,
        license_expiry: Option<NaiveDate>,
        status: &str,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers
                (id, organisation_id, name, phone, license_number, license_expiry, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(organisation_id)
        .bind(name)
        .bind(phone)
        .bind(license_number)
        .bind(license_expiry)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                "Ya existe un conductor con este número de licencia en tu organización",
            )
        })?;

        Ok(driver)
    }

    pub async fn find_by_organisation(
        &self,
        organisation_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT * FROM drivers
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

        Ok(drivers)
    }

    /// Cambiar el estado de un conductor; None si no pertenece a la organización
    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        status: &str,
    ) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
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

        Ok(driver)
    }
}
