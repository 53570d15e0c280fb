use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, DriverResponse, UpdateDriverStatusRequest};
use crate::dto::ListQuery;
use crate::middleware::auth::{auth_middleware, require_fleet_role, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id/status", patch(update_driver_status))
        .route_layer(middleware::from_fn(require_fleet_role))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_drivers(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list(organisation_id, &query).await?;
    Ok(Json(response))
}

async fn create_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.create(organisation_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_driver_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverStatusRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = DriverController::new(state.pool.clone());
    let response = controller.update_status(id, organisation_id, request).await?;
    Ok(Json(response))
}
