use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::shared::{validate_limit, validate_offset};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

const MAX_EMAIL_LEN: usize = 120;
const MAX_USERNAME_LEN: usize = 50;

/// Request body for creating or replacing an owner.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct OwnerRequest {
    /// Contact email, unique across owners.
    #[schema(example = "a@x.com")]
    pub email: String,
    /// Optional handle (1-50 chars, letters, digits and underscores), unique when set.
    /// Omitting it on update clears the stored value.
    #[schema(example = "tom_owner")]
    #[serde(default)]
    pub username: Option<String>,
}

pub fn validate_owner_request(payload: &OwnerRequest) -> Result<(), AppError> {
    let email = payload.email.trim();
    if email.chars().count() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(email) {
        return Err(AppError::invalid_field(
            "email",
            "email must be a valid email address",
        ));
    }
    if let Some(ref username) = payload.username {
        let username = username.trim();
        if username.is_empty() || username.chars().count() > MAX_USERNAME_LEN {
            return Err(AppError::invalid_field(
                "username",
                "username must be 1-50 characters",
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(AppError::invalid_field(
                "username",
                "username must contain only letters, digits, and underscores",
            ));
        }
    }
    Ok(())
}

/// An owner as returned by the API.
#[derive(Serialize, utoipa::ToSchema)]
pub struct OwnerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "tom_owner")]
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::owner::Model> for OwnerResponse {
    fn from(m: crate::entity::owner::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            username: m.username,
            created_at: m.created_at,
        }
    }
}

/// Query parameters for owner listing. Without `limit` every owner is returned.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct OwnerListQuery {
    /// Maximum number of owners to return (1-1000).
    #[param(example = 50)]
    pub limit: Option<u64>,
    /// Number of owners to skip.
    #[param(example = 0)]
    pub offset: Option<u64>,
}

pub fn validate_owner_list_query(query: &OwnerListQuery) -> Result<(), AppError> {
    if let Some(limit) = query.limit {
        validate_limit(limit)?;
    }
    if let Some(offset) = query.offset {
        validate_offset(offset)?;
    }
    Ok(())
}
