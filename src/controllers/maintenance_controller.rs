use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceStatusRequest,
};
use crate::dto::ListQuery;
use crate::models::maintenance::MaintenanceStatus;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{clamp_non_negative, non_empty, parse_required_date};

pub struct MaintenanceController {
    pool: PgPool,
    repository: MaintenanceRepository,
    vehicles: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(
        &self,
        organisation_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        let logs = self
            .repository
            .find_by_organisation(organisation_id, query.limit(), query.offset())
            .await?;

        Ok(logs.into_iter().map(MaintenanceResponse::from).collect())
    }

    /// Abrir un registro deja el vehículo en "In Shop" en la misma
    /// transacción que el insert.
    pub async fn create(
        &self,
        organisation_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        let issue = non_empty(request.issue.as_ref());
        let service_date = non_empty(request.service_date.as_ref());

        let (Some(vehicle_id), Some(issue), Some(service_date)) =
            (request.vehicle_id, issue, service_date)
        else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: vehicleId, issue, serviceDate".to_string(),
            ));
        };

        let service_date = parse_required_date(&service_date, "serviceDate")?;
        let cost = clamp_non_negative(request.cost);

        // Un estado válido enviado se respeta; cualquier otra cosa cae a Scheduled
        let status = request
            .status
            .as_deref()
            .and_then(MaintenanceStatus::parse)
            .unwrap_or(MaintenanceStatus::Scheduled);

        let mut tx = self.pool.begin().await?;

        let log = self
            .repository
            .create_tx(
                &mut tx,
                organisation_id,
                vehicle_id,
                &issue,
                service_date,
                cost,
                status.as_str(),
            )
            .await?;

        let updated = self
            .vehicles
            .set_status_tx(
                &mut tx,
                vehicle_id,
                organisation_id,
                VehicleStatus::InShop.as_str(),
            )
            .await?;

        // Vehículo ajeno o inexistente: se descarta también el insert
        if updated == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        tx.commit().await?;

        Ok(MaintenanceResponse::from(log))
    }

    /// Completar el último registro abierto de un vehículo lo devuelve a
    /// "Available"; con otros registros abiertos se queda en taller.
    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        request: UpdateMaintenanceStatusRequest,
    ) -> Result<MaintenanceResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(MaintenanceStatus::parse)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Estado inválido. Debe ser Scheduled, In Progress o Completed"
                        .to_string(),
                )
            })?;

        let mut tx = self.pool.begin().await?;

        let log = self
            .repository
            .update_status_tx(&mut tx, id, organisation_id, status.as_str())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Registro de mantenimiento no encontrado".to_string())
            })?;

        if status == MaintenanceStatus::Completed {
            self.vehicles
                .release_from_shop_tx(&mut tx, log.vehicle_id, organisation_id, log.id)
                .await?;
        }

        tx.commit().await?;

        Ok(MaintenanceResponse::from(log))
    }
}
