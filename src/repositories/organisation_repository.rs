use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::organisation::Organisation;
use crate::utils::errors::AppError;

pub struct OrganisationRepository {
    pool: PgPool,
}

impl OrganisationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una fila de organización dentro de la transacción de registro
    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        access_code: &str,
        user_id: Uuid,
        role: &str,
    ) -> Result<Organisation, AppError> {
        let organisation = sqlx::query_as::<_, Organisation>(
            r#"
            INSERT INTO organisations (id, name, access_code, user_id, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(access_code)
        .bind(user_id)
        .bind(role)
        .fetch_one(&mut **tx)
        .await?;

        Ok(organisation)
    }

    pub async fn access_code_exists_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        access_code: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM organisations WHERE access_code = $1)",
        )
        .bind(access_code)
        .fetch_one(&mut **tx)
        .await?;

        Ok(result.0)
    }

    /// Buscar una organización de manager por id (el destino de un dispatcher)
    pub async fn find_manager_by_id_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Option<Organisation>, AppError> {
        let organisation = sqlx::query_as::<_, Organisation>(
            "SELECT * FROM organisations WHERE id = $1 AND role = 'manager' LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(organisation)
    }

    /// La fila de organización propia de un usuario
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Organisation>, AppError> {
        let organisation = sqlx::query_as::<_, Organisation>(
            "SELECT * FROM organisations WHERE user_id = $1 LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organisation)
    }

    /// La fila canónica del tenant: la organización de manager con este código
    pub async fn find_manager_by_access_code(
        &self,
        access_code: &str,
    ) -> Result<Option<Organisation>, AppError> {
        let organisation = sqlx::query_as::<_, Organisation>(
            "SELECT * FROM organisations WHERE access_code = $1 AND role = 'manager' LIMIT 1",
        )
        .bind(access_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organisation)
    }
}
