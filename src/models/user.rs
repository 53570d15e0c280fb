//! Modelo de User
//!
//! Este módulo contiene el struct User y el rol de cuenta.
//! Mapea exactamente a la tabla users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol de una cuenta dentro de una organización
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Manager,
    Dispatcher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Manager => "manager",
            UserRole::Dispatcher => "dispatcher",
        }
    }

    /// Parsear un rol, aceptando cualquier capitalización
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "manager" => Some(UserRole::Manager),
            "dispatcher" => Some(UserRole::Dispatcher),
            _ => None,
        }
    }
}

/// User - mapea exactamente a la tabla users
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub reset_token_hash: Option<String>,
    pub reset_token_expiry: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!(UserRole::parse("manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::parse("Manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::parse("DISPATCHER"), Some(UserRole::Dispatcher));
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse(""), None);
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::Manager.as_str(), "manager");
        assert_eq!(UserRole::Dispatcher.as_str(), "dispatcher");
    }
}
