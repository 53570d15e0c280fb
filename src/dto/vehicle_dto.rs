use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::Vehicle;

// Request para registrar un vehículo en la flota
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub model: Option<String>,
    pub plate: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub capacity: Option<i64>,
    pub status: Option<String>,
    pub odometer: Option<i64>,
    pub purchase_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: Option<String>,
}

// Response de vehículo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub capacity: i32,
    pub status: String,
    pub odometer: i32,
    pub purchase_date: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            model: vehicle.model,
            plate: vehicle.plate,
            vehicle_type: vehicle.vehicle_type,
            capacity: vehicle.capacity_kg,
            status: vehicle.status,
            odometer: vehicle.odometer_km,
            purchase_date: vehicle
                .purchase_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_response_uses_wire_field_names() {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            organisation_id: Uuid::new_v4(),
            model: "Hiace".to_string(),
            plate: "KAA1".to_string(),
            vehicle_type: "Van".to_string(),
            capacity_kg: 1000,
            status: "Available".to_string(),
            odometer_km: 0,
            purchase_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(VehicleResponse::from(vehicle)).unwrap();
        assert_eq!(json["type"], "Van");
        assert_eq!(json["capacity"], 1000);
        assert_eq!(json["odometer"], 0);
        assert_eq!(json["purchaseDate"], "2023-06-01");
    }

    #[test]
    fn test_missing_purchase_date_serializes_empty() {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            organisation_id: Uuid::new_v4(),
            model: "Actros".to_string(),
            plate: "KBB2".to_string(),
            vehicle_type: "Truck".to_string(),
            capacity_kg: 18000,
            status: "Available".to_string(),
            odometer_km: 120_000,
            purchase_date: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(VehicleResponse::from(vehicle)).unwrap();
        assert_eq!(json["purchaseDate"], "");
    }

    #[test]
    fn test_create_request_accepts_type_key() {
        let request: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "model": "Hiace",
            "plate": "KAA1",
            "type": "Van",
            "capacity": 1000
        }))
        .unwrap();
        assert_eq!(request.vehicle_type.as_deref(), Some("Van"));
        assert_eq!(request.capacity, Some(1000));
        assert!(request.status.is_none());
    }
}
