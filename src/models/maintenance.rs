//! Modelo de MaintenanceLog
//!
//! Mapea exactamente a la tabla maintenance_logs. Un vehículo solo sale
//! de "In Shop" cuando se cierra su último registro abierto.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del registro de mantenimiento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Scheduled" => Some(MaintenanceStatus::Scheduled),
            "In Progress" => Some(MaintenanceStatus::InProgress),
            "Completed" => Some(MaintenanceStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub vehicle_id: Uuid,
    pub issue: String,
    pub service_date: NaiveDate,
    pub cost: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        for status in [
            MaintenanceStatus::Scheduled,
            MaintenanceStatus::InProgress,
            MaintenanceStatus::Completed,
        ] {
            assert_eq!(MaintenanceStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(MaintenanceStatus::parse("InProgress"), None);
    }
}
