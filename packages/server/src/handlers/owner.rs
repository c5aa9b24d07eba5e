use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{cat, owner};
use crate::error::{AppError, ErrorBody, unique_violation_as_conflict};
use crate::extractors::id::RecordId;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::models::owner::*;
use crate::state::AppState;

const OWNER_TAKEN: &str = "An owner with this email or username already exists";

/// Stand-in for "no limit"; large enough to never truncate, small enough to bind as BIGINT.
const UNBOUNDED: u64 = i64::MAX as u64;

#[utoipa::path(
    get,
    path = "/owners",
    tag = "Owners",
    operation_id = "listOwners",
    summary = "List owners",
    description = "Returns owners ordered by ID. Without `limit` all owners are returned.",
    params(OwnerListQuery),
    responses(
        (status = 200, description = "List of owners", body = Vec<OwnerResponse>),
        (status = 400, description = "Invalid query (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_owners(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<OwnerListQuery>,
) -> Result<Json<Vec<OwnerResponse>>, AppError> {
    validate_owner_list_query(&query)?;

    let owners = owner::Entity::find()
        .order_by_asc(owner::Column::Id)
        .offset(query.offset)
        .limit(Some(query.limit.unwrap_or(UNBOUNDED)))
        .all(&state.db)
        .await?;

    Ok(Json(owners.into_iter().map(OwnerResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/owners",
    tag = "Owners",
    operation_id = "createOwner",
    summary = "Create an owner",
    request_body = OwnerRequest,
    responses(
        (status = 201, description = "Owner created", body = OwnerResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Email or username taken (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn create_owner(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OwnerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_owner_request(&payload)?;

    let new_owner = owner::ActiveModel {
        email: Set(payload.email.trim().to_string()),
        username: Set(payload.username.map(|u| u.trim().to_string())),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_owner
        .insert(&state.db)
        .await
        .map_err(|e| unique_violation_as_conflict(e, OWNER_TAKEN))?;

    tracing::info!(owner_id = model.id, "Owner created");
    Ok((StatusCode::CREATED, Json(OwnerResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "Owners",
    operation_id = "getOwner",
    summary = "Get an owner by ID",
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner details", body = OwnerResponse),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_owner(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<OwnerResponse>, AppError> {
    let model = find_owner(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    put,
    path = "/owners/{id}",
    tag = "Owners",
    operation_id = "updateOwner",
    summary = "Replace an owner",
    description = "Replaces every mutable field. An omitted `username` is cleared.",
    params(("id" = i32, Path, description = "Owner ID")),
    request_body = OwnerRequest,
    responses(
        (status = 200, description = "Owner updated", body = OwnerResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Email or username taken (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_owner(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    AppJson(payload): AppJson<OwnerRequest>,
) -> Result<Json<OwnerResponse>, AppError> {
    validate_owner_request(&payload)?;

    let existing = find_owner(&state.db, id).await?;
    let mut active: owner::ActiveModel = existing.into();
    active.email = Set(payload.email.trim().to_string());
    active.username = Set(payload.username.map(|u| u.trim().to_string()));

    let model = active
        .update(&state.db)
        .await
        .map_err(|e| unique_violation_as_conflict(e, OWNER_TAKEN))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/owners/{id}",
    tag = "Owners",
    operation_id = "deleteOwner",
    summary = "Delete an owner",
    description = "Deletes an owner that owns no cats. Returns 409 CONFLICT while any cat still references it.",
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Owner still has cats (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_owner(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    find_owner(&txn, id).await?;

    let cat_count = cat::Entity::find()
        .filter(cat::Column::OwnerId.eq(id))
        .count(&txn)
        .await?;
    if cat_count > 0 {
        return Err(AppError::Conflict(
            "Cannot delete owner with existing cats".into(),
        ));
    }

    owner::Entity::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                tracing::debug!("Owner delete raced with a cat insert");
                AppError::Conflict("Cannot delete owner with existing cats".into())
            }
            _ => AppError::from(e),
        })?;

    txn.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn find_owner<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<owner::Model, AppError> {
    owner::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Owner not found".into()))
}
