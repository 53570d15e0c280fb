use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::expense_dto::{CreateExpenseRequest, DeleteExpenseResponse, ExpenseResponse};
use crate::dto::ListQuery;
use crate::middleware::auth::{auth_middleware, require_fleet_role, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:id", delete(delete_expense))
        .route_layer(middleware::from_fn(require_fleet_role))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_expenses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.list(organisation_id, &query).await?;
    Ok(Json(response))
}

async fn create_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.create(organisation_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteExpenseResponse>, AppError> {
    let organisation_id = user.require_organisation()?;
    let controller = ExpenseController::new(state.pool.clone());
    let response = controller.remove(id, organisation_id).await?;
    Ok(Json(response))
}
