use serde::Serialize;

/// Returned when the database answers the probe query.
#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthyResponse {
    #[schema(example = "Service is fully operational")]
    pub message: &'static str,
}

/// Returned with status 500 when the probe fails.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    #[schema(example = "unhealthy")]
    pub status: &'static str,
    #[schema(example = "Failed")]
    pub db_connection: &'static str,
}

impl Default for HealthyResponse {
    fn default() -> Self {
        Self {
            message: "Service is fully operational",
        }
    }
}

impl Default for UnhealthyResponse {
    fn default() -> Self {
        Self {
            status: "unhealthy",
            db_connection: "Failed",
        }
    }
}
