use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::owner::OwnerResponse;
use super::shared::{validate_limit, validate_offset, validate_reference_id};

pub const DEFAULT_NICKNAME: &str = "Kitty";
pub const DEFAULT_LIMIT: u64 = 10;

const MAX_DESCRIPTION_LEN: usize = 500;

fn default_nickname() -> String {
    DEFAULT_NICKNAME.to_string()
}

/// Request body for creating or replacing a cat. Every mutable field is
/// written, so omitted defaults apply on replacement too.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CatRequest {
    /// 3-10 characters. Defaults to "Kitty".
    #[serde(default = "default_nickname")]
    #[schema(example = "Tom", default = "Kitty")]
    pub nickname: String,
    /// Age in years (1-20).
    #[schema(example = 3)]
    pub age: i32,
    #[serde(default)]
    #[schema(example = true, default = false)]
    pub vaccinated: bool,
    #[schema(example = "orange")]
    pub description: String,
    /// ID of an existing owner.
    #[schema(example = 1)]
    pub owner_id: i32,
}

pub fn validate_cat_request(payload: &CatRequest) -> Result<(), AppError> {
    let len = payload.nickname.trim().chars().count();
    if !(3..=10).contains(&len) {
        return Err(AppError::invalid_field(
            "nickname",
            "nickname must be 3-10 characters",
        ));
    }
    if !(1..=20).contains(&payload.age) {
        return Err(AppError::invalid_field(
            "age",
            "age must be between 1 and 20",
        ));
    }
    if payload.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::invalid_field(
            "description",
            format!("description must be at most {MAX_DESCRIPTION_LEN} characters"),
        ));
    }
    validate_reference_id(payload.owner_id, "owner_id")
}

/// A cat with its owner embedded.
#[derive(Serialize, utoipa::ToSchema)]
pub struct CatResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Tom")]
    pub nickname: String,
    #[schema(example = 3)]
    pub age: i32,
    pub vaccinated: bool,
    #[schema(example = "orange")]
    pub description: Option<String>,
    #[schema(example = 1)]
    pub owner_id: Option<i32>,
    pub owner: Option<OwnerResponse>,
}

impl CatResponse {
    pub fn new(
        cat: crate::entity::cat::Model,
        owner: Option<crate::entity::owner::Model>,
    ) -> Self {
        Self {
            id: cat.id,
            nickname: cat.nickname,
            age: cat.age,
            vaccinated: cat.vaccinated,
            description: cat.description,
            owner_id: cat.owner_id,
            owner: owner.map(OwnerResponse::from),
        }
    }
}

/// Query parameters for cat listing.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct CatListQuery {
    /// Maximum number of cats to return (1-1000, default 10).
    #[param(example = 10)]
    pub limit: Option<u64>,
    /// Number of cats to skip (default 0).
    #[param(example = 0)]
    pub offset: Option<u64>,
}

impl CatListQuery {
    /// Resolved `(limit, offset)` after applying defaults and bounds.
    pub fn window(&self) -> Result<(u64, u64), AppError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        validate_limit(limit)?;
        let offset = self.offset.unwrap_or(0);
        validate_offset(offset)?;
        Ok((limit, offset))
    }
}
