use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverStatusRequest};
use crate::dto::ListQuery;
use crate::models::driver::DriverStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{non_empty, parse_optional_date};

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        organisation_id: Uuid,
        query: &ListQuery,
    ) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self
            .repository
            .find_by_organisation(organisation_id, query.limit(), query.offset())
            .await?;

        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn create(
        &self,
        organisation_id: Uuid,
        request: CreateDriverRequest,
    ) -> Result<DriverResponse, AppError> {
        let name = non_empty(request.name.as_ref());
        let phone = non_empty(request.phone.as_ref());
        let license_number = non_empty(request.license_number.as_ref());

        let (Some(name), Some(phone), Some(license_number)) = (name, phone, license_number)
        else {
            return Err(AppError::BadRequest(
                "Faltan campos requeridos: name, phone, licenseNumber".to_string(),
            ));
        };

        // Un estado válido enviado se respeta; cualquier otra cosa cae a active
        let status = request
            .status
            .as_deref()
            .and_then(DriverStatus::parse)
            .unwrap_or(DriverStatus::Active);

        let license_expiry =
            parse_optional_date(request.license_expiry.as_deref(), "licenseExpiry")?;

        let driver = self
            .repository
            .create(
                organisation_id,
                &name,
                &phone,
                &license_number,
                license_expiry,
                status.as_str(),
            )
            .await?;

        Ok(DriverResponse::from(driver))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        organisation_id: Uuid,
        request: UpdateDriverStatusRequest,
    ) -> Result<DriverResponse, AppError> {
        let status = request
            .status
            .as_deref()
            .and_then(DriverStatus::parse)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Estado inválido. Debe ser active, inactive o suspended".to_string(),
                )
            })?;

        let driver = self
            .repository
            .update_status(id, organisation_id, status.as_str())
            .await?
            .ok_or_else(|| AppError::NotFound("Conductor no encontrado".to_string()))?;

        Ok(DriverResponse::from(driver))
    }
}
