use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{CreateTripRequest, TripResponse, UpdateTripStatusRequest};
use crate::dto::ListQuery;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips).post(create_trip))
        .route("/:id/status", patch(update_trip_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_trips(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(organisation_id, &query).await?;
    Ok(Json(response))
}

async fn create_trip(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<TripResponse>), AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(organisation_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_trip_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripStatusRequest>,
) -> Result<Json<TripResponse>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = TripController::new(state.pool.clone());
    let response = controller.update_status(id, organisation_id, request).await?;
    Ok(Json(response))
}
