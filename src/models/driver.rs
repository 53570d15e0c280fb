//! Modelo de Driver
//!
//! Mapea exactamente a la tabla drivers, con tenancy por organisation_id
//! como el resto de recursos.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del conductor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Active,
    Inactive,
    Suspended,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
            DriverStatus::Suspended => "suspended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(DriverStatus::Active),
            "inactive" => Some(DriverStatus::Inactive),
            "suspended" => Some(DriverStatus::Suspended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        for status in [
            DriverStatus::Active,
            DriverStatus::Inactive,
            DriverStatus::Suspended,
        ] {
            assert_eq!(DriverStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(DriverStatus::parse("Active"), None);
    }
}
