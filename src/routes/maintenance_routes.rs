use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceResponse, UpdateMaintenanceStatusRequest,
};
use crate::dto::ListQuery;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(create_maintenance))
        .route("/:id/status", patch(update_maintenance_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list(organisation_id, &query).await?;
    Ok(Json(response))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceResponse>), AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(organisation_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_maintenance_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceStatusRequest>,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update_status(id, organisation_id, request).await?;
    Ok(Json(response))
}
