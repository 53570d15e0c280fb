use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::user::User;
use crate::utils::errors::{map_unique_violation, AppError};

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un usuario dentro de la transacción de registro
    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| map_unique_violation(e, "El email ya está registrado"))?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    /// Guardar el hash del código de restablecimiento y su expiración
    pub async fn set_reset_token(
        &self,
        email: &str,
        token_hash: &str,
        expiry: DateTime<Utc>,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE users
            SET reset_token_hash = $2, reset_token_expiry = $3
            WHERE email = $1
            "#,
        )
        .bind(email)
        .bind(token_hash)
        .bind(expiry)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Buscar un usuario con un código de restablecimiento vigente
    pub async fn find_by_reset_token(
        &self,
        email: &str,
        token_hash: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE email = $1
              AND reset_token_hash = $2
              AND reset_token_expiry > NOW()
            "#,
        )
        .bind(email)
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Actualizar la contraseña y consumir el código en una sola sentencia.
    /// Devuelve false si el código no es válido o ya expiró.
    pub async fn reset_password(
        &self,
        email: &str,
        token_hash: &str,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $3, reset_token_hash = NULL, reset_token_expiry = NULL
            WHERE email = $1
              AND reset_token_hash = $2
              AND reset_token_expiry > NOW()
            "#,
        )
        .bind(email)
        .bind(token_hash)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
