use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleResponse,
};
use crate::dto::ListQuery;
use crate::models::vehicle::{VehicleStatus, VehicleType};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{clamp_non_negative, non_empty, parse_optional_date};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        organisation_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self
            .repository
            .find_by_organisation(organisation_id, query.limit(), query.offset())
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn create(
        &self,
        organisation_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        // Validar campos
        let model = non_empty(request.model.as_ref());
        let plate = non_empty(request.plate.as_ref());
        let vehicle_type = non_empty(request.vehicle_type.as_ref());

        let (Some(model), Some(plate), Some(vehicle_type), Some(capacity)) =
            (model, plate, vehicle_type, request.capacity)
        else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: model, plate, type, capacity".to_string(),
            ));
        };

        let vehicle_type = VehicleType::parse(&vehicle_type).ok_or_else(|| {
            AppError::BadRequest("Tipo inválido. Debe ser Truck, Van o Bike".to_string())
        })?;

        if capacity < 0 {
            return Err(AppError::BadRequest(
                "La capacidad debe ser un número no negativo".to_string(),
            ));
        }
        let capacity = i32::try_from(capacity).map_err(|_| {
            AppError::BadRequest("La capacidad está fuera de rango".to_string())
        })?;

        // Un estado válido enviado se respeta; cualquier otra cosa cae a Available
        let status = request
            .status
            .as_deref()
            .and_then(VehicleStatus::parse)
            .unwrap_or(VehicleStatus::Available);

        let odometer = clamp_non_negative(request.odometer);
        let purchase_date = parse_optional_date(request.purchase_date.as_deref(), "purchaseDate")?;

        // Verificar que la matrícula no exista para esta organización
        if self.repository.plate_exists(&plate, organisation_id).await? {
            return Err(AppError::Conflict(
                "Ya existe un vehículo con esta matrícula en tu flota".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                organisation_id,
                &model,
                &plate,
                vehicle_type.as_str(),
                capacity,
                status.as_str(),
                odometer,
                purchase_date,
            )
            .await?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        request: UpdateVehicleStatusRequest,
    ) -> Result<VehicleResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(VehicleStatus::parse)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Estado inválido. Debe ser Available, On Trip, In Shop o Retired"
                        .to_string(),
                )
            })?;

        let vehicle = self
            .repository
            .update_status(id, organisation_id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }
}
