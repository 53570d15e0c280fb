use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::trip::Trip;

// Request para crear un viaje; cualquier estado enviado se ignora,
// un viaje siempre nace en Draft.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_time: Option<String>,
    pub eta: Option<String>,
    pub cargo_weight: Option<i64>,
    pub estimated_cost: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTripStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub departure_time: String,
    pub eta: String,
    pub cargo_weight: i32,
    pub estimated_cost: i32,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver_id: trip.driver_id,
            origin: trip.origin,
            destination: trip.destination,
            status: trip.status,
            departure_time: trip
                .departure_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            eta: trip
                .eta
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            cargo_weight: trip.cargo_weight,
            estimated_cost: trip.estimated_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_response_formats_times() {
        let trip = Trip {
            id: Uuid::new_v4(),
            organisation_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
            origin: "Nairobi".to_string(),
            destination: "Mombasa".to_string(),
            status: "Draft".to_string(),
            departure_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0),
            eta: None,
            cargo_weight: 500,
            estimated_cost: 120,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(TripResponse::from(trip)).unwrap();
        assert_eq!(json["departureTime"], "2024-03-01 08:30");
        assert_eq!(json["eta"], "");
        assert_eq!(json["cargoWeight"], 500);
    }
}
