//! Dice Routes - CRUD and rolling
//!
//! HTTP handlers that delegate to DiceService for business logic.
//! Size validation happens here, before the service is called.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::models::{CreateDiceRequest, DiceResponse, RollResponse};
use crate::AppState;

pub const ERROR_INVALID_SIZE: &str = "The dice size must be between 1 and 1000.";
pub const ERROR_NOT_FOUND: &str = "Dice not found with ID: ";
pub const SUCCESSFUL_DELETED: &str = "Successfully deleted dice with Id: ";

type ApiError = (StatusCode, String);

fn not_found(id: i32) -> ApiError {
    (StatusCode::NOT_FOUND, format!("{}{}", ERROR_NOT_FOUND, id))
}

fn invalid_size() -> ApiError {
    (StatusCode::BAD_REQUEST, ERROR_INVALID_SIZE.to_string())
}

fn internal_error(e: dice::DomainError) -> ApiError {
    tracing::error!("Dice request failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// List all Dice
#[utoipa::path(
    get,
    path = "/api/v1/dices",
    responses(
        (status = 200, description = "List of all Dice, empty when none exist", body = Vec<DiceResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dice"
)]
pub async fn list_dices(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiceResponse>>, ApiError> {
    let dices = state
        .dice_service
        .list_all()
        .await
        .map_err(internal_error)?;

    Ok(Json(dices.into_iter().map(DiceResponse::from).collect()))
}

/// Create new Dice
#[utoipa::path(
    post,
    path = "/api/v1/dices",
    request_body = CreateDiceRequest,
    responses(
        (status = 200, description = "Dice created", body = DiceResponse),
        (status = 400, description = "Size outside [1, 1000]", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dice"
)]
pub async fn create_dice(
    State(state): State<AppState>,
    payload: Result<Json<CreateDiceRequest>, JsonRejection>,
) -> Result<Json<DiceResponse>, ApiError> {
    // An unreadable body carries no usable size either
    let size = match payload {
        Ok(Json(request)) => request.valid_size().ok_or_else(|| {
            tracing::warn!("Rejected Dice with size {:?}", request.size);
            invalid_size()
        })?,
        Err(rejection) => {
            tracing::warn!("Rejected Dice body: {}", rejection.body_text());
            return Err(invalid_size());
        }
    };

    let created = state
        .dice_service
        .create(dice::Dice::new(size))
        .await
        .map_err(internal_error)?;

    Ok(Json(created.into()))
}

/// Get Dice by ID
#[utoipa::path(
    get,
    path = "/api/v1/dices/{id}",
    params(("id" = i32, Path, description = "Dice ID")),
    responses(
        (status = 200, description = "Dice found", body = DiceResponse),
        (status = 404, description = "Dice not found", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dice"
)]
pub async fn get_dice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DiceResponse>, ApiError> {
    let dice = state
        .dice_service
        .get_by_id(id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(dice.into()))
}

/// Roll a Dice
#[utoipa::path(
    post,
    path = "/api/v1/dices/{id}/rolls",
    params(("id" = i32, Path, description = "Dice ID")),
    responses(
        (status = 200, description = "Roll in [1, size]", body = RollResponse),
        (status = 404, description = "Dice not found", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dice"
)]
pub async fn roll_dice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RollResponse>, ApiError> {
    let result = state
        .dice_service
        .roll(id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(result.into()))
}

/// Delete Dice
#[utoipa::path(
    delete,
    path = "/api/v1/dices/{id}",
    params(("id" = i32, Path, description = "Dice ID")),
    responses(
        (status = 200, description = "Dice deleted", body = String),
        (status = 404, description = "Dice not found", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dice"
)]
pub async fn delete_dice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    let deleted = state
        .dice_service
        .delete(id)
        .await
        .map_err(internal_error)?;

    if !deleted {
        return Err(not_found(id));
    }

    Ok(format!("{}{}", SUCCESSFUL_DELETED, id))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/dices", get(list_dices).post(create_dice))
        .route("/api/v1/dices/:id", get(get_dice).delete(delete_dice))
        .route("/api/v1/dices/:id/rolls", post(roll_dice))
}
