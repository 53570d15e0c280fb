use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleResponse,
};
use crate::dto::ListQuery;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id/status", patch(update_vehicle_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(organisation_id, &query).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(organisation_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_status(id, organisation_id, request).await?;
    Ok(Json(response))
}
