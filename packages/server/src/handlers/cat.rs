use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{cat, owner};
use crate::error::{AppError, ErrorBody};
use crate::extractors::id::RecordId;
use crate::extractors::json::AppJson;
use crate::extractors::query::AppQuery;
use crate::handlers::owner::find_owner;
use crate::models::cat::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/cats",
    tag = "Cats",
    operation_id = "listCats",
    summary = "List cats with offset pagination",
    description = "Returns at most `limit` cats (default 10, max 1000) ordered by ID, starting at `offset`. Each cat embeds its owner.",
    params(CatListQuery),
    responses(
        (status = 200, description = "List of cats", body = Vec<CatResponse>),
        (status = 400, description = "Invalid query (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_cats(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CatListQuery>,
) -> Result<Json<Vec<CatResponse>>, AppError> {
    let (limit, offset) = query.window()?;

    let rows = cat::Entity::find()
        .find_also_related(owner::Entity)
        .order_by_asc(cat::Column::Id)
        .offset(Some(offset))
        .limit(Some(limit))
        .all(&state.db)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(c, o)| CatResponse::new(c, o))
            .collect(),
    ))
}

#[utoipa::path(
    post,
    path = "/cats",
    tag = "Cats",
    operation_id = "createCat",
    summary = "Create a cat",
    description = "Creates a cat for an existing owner. Returns 404 if `owner_id` does not reference an owner; nothing is stored in that case.",
    request_body = CatRequest,
    responses(
        (status = 201, description = "Cat created", body = CatResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Owner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(owner_id = payload.owner_id))]
pub async fn create_cat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CatRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_cat_request(&payload)?;

    let owner = find_owner(&state.db, payload.owner_id).await?;

    let new_cat = cat::ActiveModel {
        nickname: Set(payload.nickname.trim().to_string()),
        age: Set(payload.age),
        vaccinated: Set(payload.vaccinated),
        description: Set(Some(payload.description)),
        owner_id: Set(Some(owner.id)),
        ..Default::default()
    };

    let model = new_cat.insert(&state.db).await.map_err(owner_vanished)?;

    tracing::info!(cat_id = model.id, "Cat created");
    Ok((StatusCode::CREATED, Json(CatResponse::new(model, Some(owner)))))
}

#[utoipa::path(
    get,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "getCat",
    summary = "Get a cat by ID",
    params(("id" = i32, Path, description = "Cat ID")),
    responses(
        (status = 200, description = "Cat details", body = CatResponse),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Cat not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_cat(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<CatResponse>, AppError> {
    let (model, owner) = cat::Entity::find_by_id(id)
        .find_also_related(owner::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cat not found".into()))?;

    Ok(Json(CatResponse::new(model, owner)))
}

#[utoipa::path(
    put,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "updateCat",
    summary = "Replace a cat",
    description = "Replaces every mutable field. The new `owner_id` must reference an existing owner, as on creation.",
    params(("id" = i32, Path, description = "Cat ID")),
    request_body = CatRequest,
    responses(
        (status = 200, description = "Cat updated", body = CatResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Cat or owner not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(owner_id = payload.owner_id))]
pub async fn update_cat(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    AppJson(payload): AppJson<CatRequest>,
) -> Result<Json<CatResponse>, AppError> {
    validate_cat_request(&payload)?;

    let existing = find_cat(&state.db, id).await?;
    let owner = find_owner(&state.db, payload.owner_id).await?;

    let mut active: cat::ActiveModel = existing.into();
    active.nickname = Set(payload.nickname.trim().to_string());
    active.age = Set(payload.age);
    active.vaccinated = Set(payload.vaccinated);
    active.description = Set(Some(payload.description));
    active.owner_id = Set(Some(owner.id));

    let model = active.update(&state.db).await.map_err(owner_vanished)?;

    Ok(Json(CatResponse::new(model, Some(owner))))
}

#[utoipa::path(
    delete,
    path = "/cats/{id}",
    tag = "Cats",
    operation_id = "deleteCat",
    summary = "Delete a cat",
    params(("id" = i32, Path, description = "Cat ID")),
    responses(
        (status = 204, description = "Cat deleted"),
        (status = 400, description = "Invalid ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Cat not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_cat(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    find_cat(&state.db, id).await?;
    cat::Entity::delete_by_id(id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_cat<C: ConnectionTrait>(db: &C, id: i32) -> Result<cat::Model, AppError> {
    cat::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cat not found".into()))
}

/// The owner passed the existence check but was deleted before the write landed.
fn owner_vanished(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            tracing::debug!("Owner removed between existence check and cat write");
            AppError::NotFound("Owner not found".into())
        }
        _ => AppError::from(err),
    }
}
