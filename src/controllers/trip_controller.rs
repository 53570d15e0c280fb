use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::trip_dto::{CreateTripRequest, TripResponse, UpdateTripStatusRequest};
use crate::dto::ListQuery;
use crate::models::trip::TripStatus;
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{clamp_non_negative, non_empty, parse_optional_datetime};

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        organisation_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<TripResponse>, AppError> {
        let trips = self
            .repository
            .find_by_organisation(organisation_id, query.limit(), query.offset())
            .await?;

        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    /// Todo viaje se crea en Draft, venga lo que venga en el payload
    pub async fn create(
        &self,
        organisation_id: Uuid,
        request: CreateTripRequest,
    ) -> Result<TripResponse, AppError> {
        let origin = non_empty(request.origin.as_ref());
        let destination = non_empty(request.destination.as_ref());

        let (Some(vehicle_id), Some(driver_id), Some(origin), Some(destination)) =
            (request.vehicle_id, request.driver_id, origin, destination)
        else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: vehicleId, driverId, origin, destination"
                    .to_string(),
            ));
        };

        let departure_time =
            parse_optional_datetime(request.departure_time.as_deref(), "departureTime")?;
        let eta = parse_optional_datetime(request.eta.as_deref(), "eta")?;

        let cargo_weight = clamp_non_negative(request.cargo_weight);
        let estimated_cost = clamp_non_negative(request.estimated_cost);

        let trip = self
            .repository
            .create(
                organisation_id,
                vehicle_id,
                driver_id,
                &origin,
                &destination,
                departure_time,
                eta,
                cargo_weight,
                estimated_cost,
            )
            .await?;

        Ok(TripResponse::from(trip))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        request: UpdateTripStatusRequest,
    ) -> Result<TripResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(TripStatus::parse)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Estado inválido. Debe ser Draft, Dispatched, Completed o Cancelled"
                        .to_string(),
                )
            })?;

        let trip = self
            .repository
            .update_status(id, organisation_id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(TripResponse::from(trip))
    }
}
