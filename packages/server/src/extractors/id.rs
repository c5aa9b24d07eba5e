use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// The `{id}` path segment of a single-record route. Must be a positive integer.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || AppError::invalid_field("id", "id must be a positive 32-bit integer");
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;
        if id < 1 {
            return Err(invalid());
        }
        Ok(RecordId(id))
    }
}
