//! Modelo de Trip
//!
//! Mapea exactamente a la tabla trips. Todo viaje nace en estado Draft.

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del viaje
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "Draft",
            TripStatus::Dispatched => "Dispatched",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Draft" => Some(TripStatus::Draft),
            "Dispatched" => Some(TripStatus::Dispatched),
            "Completed" => Some(TripStatus::Completed),
            "Cancelled" => Some(TripStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub departure_time: Option<NaiveDateTime>,
    pub eta: Option<NaiveDateTime>,
    pub cargo_weight: i32,
    pub estimated_cost: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        for status in [
            TripStatus::Draft,
            TripStatus::Dispatched,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ] {
            assert_eq!(TripStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TripStatus::parse("draft"), None);
    }
}
