//! Modelo de Organisation
//!
//! Una fila por usuario: la fila del manager es la canónica (posee el
//! código de acceso generado); las filas de dispatcher duplican nombre y
//! código del manager al unirse. El id de la fila del manager es el
//! `organisation_id` con el que se filtra cada recurso del tenant.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Organisation {
    pub id: Uuid,
    pub name: String,
    pub access_code: String,
    pub user_id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
