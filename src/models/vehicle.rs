//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus enums de estado y tipo.
//! Mapea exactamente a la tabla vehicles.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InShop,
    Retired,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On Trip",
            VehicleStatus::InShop => "In Shop",
            VehicleStatus::Retired => "Retired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Available" => Some(VehicleStatus::Available),
            "On Trip" => Some(VehicleStatus::OnTrip),
            "In Shop" => Some(VehicleStatus::InShop),
            "Retired" => Some(VehicleStatus::Retired),
            _ => None,
        }
    }
}

/// Tipo de vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Truck,
    Van,
    Bike,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
            VehicleType::Bike => "Bike",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Truck" => Some(VehicleType::Truck),
            "Van" => Some(VehicleType::Van),
            "Bike" => Some(VehicleType::Bike),
            _ => None,
        }
    }
}

/// Vehicle - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub organisation_id: Uuid,
    pub model: String,
    pub plate: String,
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub capacity_kg: i32,
    pub status: String,
    pub odometer_km: i32,
    pub purchase_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        for status in [
            VehicleStatus::Available,
            VehicleStatus::OnTrip,
            VehicleStatus::InShop,
            VehicleStatus::Retired,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(VehicleStatus::parse("available"), None);
        assert_eq!(VehicleStatus::parse("OnTrip"), None);
    }

    #[test]
    fn test_type_parse_trims() {
        assert_eq!(VehicleType::parse(" Van "), Some(VehicleType::Van));
        assert_eq!(VehicleType::parse("Scooter"), None);
    }
}
