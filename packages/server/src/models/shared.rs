use crate::error::AppError;

/// Upper bound for any `limit` query parameter.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Validate a page size (1-1000).
pub fn validate_limit(limit: u64) -> Result<(), AppError> {
    if !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(AppError::invalid_field(
            "limit",
            format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
        ));
    }
    Ok(())
}

/// Largest `offset` the store can bind (a signed 64-bit parameter).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Validate a row offset against what the store can bind.
pub fn validate_offset(offset: u64) -> Result<(), AppError> {
    if offset > MAX_OFFSET {
        return Err(AppError::invalid_field(
            "offset",
            format!("offset must be at most {MAX_OFFSET}"),
        ));
    }
    Ok(())
}

/// Validate that a referenced record ID is positive.
pub fn validate_reference_id(id: i32, field: &'static str) -> Result<(), AppError> {
    if id < 1 {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must be a positive integer"),
        ));
    }
    Ok(())
}
